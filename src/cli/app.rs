//! Main CLI application

use crate::config::{load_config, validate_canvas_size, validate_column, validate_config, Config};
use crate::data::{expand_inputs, LoadOptions};
use crate::error::GenplotError;
use crate::render::{AxisScale, DEFAULT_OUTPUT};
use crate::runner::Job;
use crate::template::DEFAULT_LABEL_TEMPLATE;
use crate::ui::{Reporter, Verbosity};
use clap::{value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command};
use clap_complete::Shell;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

/// Name of the executable
pub const BIN_NAME: &str = "cdf-genplot";

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

impl App {
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Run the application with the process arguments
    pub fn run(self) -> Result<(), GenplotError> {
        let matches = self.command.get_matches();
        run_matches(&matches)
    }

    /// Run the application with explicit arguments
    pub fn run_from<I, T>(self, args: I) -> Result<(), GenplotError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.get_matches_from(args);
        run_matches(&matches)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new(BIN_NAME)
        .version(crate::VERSION)
        .about("Plot empirical CDFs of numeric samples")
        .long_about(
            "Reads one or more text files of numbers (one per line or whitespace \
             separated, '-' for stdin), computes the empirical cumulative distribution \
             of each and draws them on one chart. The output extension selects the \
             format: svg, png, jpg, jpeg or bmp.",
        )
        .arg(
            Arg::new("inputs")
                .value_name("INPUT")
                .help("Input files or glob patterns ('-' reads stdin)")
                .num_args(1..)
                .required_unless_present("completions"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Output image ('-' writes SVG to stdout) [default: cdf.svg]"),
        )
        .arg(
            Arg::new("labels")
                .short('l')
                .long("labels")
                .value_name("L1,L2,...")
                .value_delimiter(',')
                .help("Curve labels, one per input; may use ${stem}, ${n}, ..."),
        )
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .value_name("TITLE")
                .help("Chart title"),
        )
        .arg(
            Arg::new("x-label")
                .long("x-label")
                .value_name("TEXT")
                .help("X axis description"),
        )
        .arg(
            Arg::new("y-label")
                .long("y-label")
                .value_name("TEXT")
                .help("Y axis description"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("PIXELS")
                .value_parser(value_parser!(u32))
                .help("Canvas width"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_name("PIXELS")
                .value_parser(value_parser!(u32))
                .help("Canvas height"),
        )
        .arg(
            Arg::new("log-x")
                .long("log-x")
                .help("Use a logarithmic x axis")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("markers")
                .long("markers")
                .help("Mark every CDF point")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("column")
                .short('c')
                .long("column")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Read only column N (1-based) of each line"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Print a percentile summary per input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("print-table")
                .long("print-table")
                .help("Print label, value and fraction for every CDF point")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-plot")
                .long("no-plot")
                .help("Do not render a chart (needs --summary or --print-table)")
                .requires("reports")
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("reports")
                .args(["summary", "print-table"])
                .multiple(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to a cdf-genplot.yml config file"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no diagnostics")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .value_parser(value_parser!(Shell))
                .exclusive(true)
                .help("Print a shell completion script and exit"),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

fn run_matches(matches: &ArgMatches) -> Result<(), GenplotError> {
    if let Some(shell) = matches.get_one::<Shell>("completions").copied() {
        let mut cmd = build_command();
        clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());
        return Ok(());
    }

    let reporter = Reporter::new(get_verbosity(matches));

    let explicit = matches.get_one::<PathBuf>("config");
    let (config, config_path) = load_config(explicit.map(PathBuf::as_path))?;
    validate_config(&config)?;
    match &config_path {
        Some(path) => reporter.debug(&format!("Using config {}", path.display())),
        None => reporter.debug("No config file found, using defaults"),
    }

    let job = build_job(matches, &config)?;
    job.execute(&reporter)
}

/// Merge command line flags over config values into a job
pub fn build_job(matches: &ArgMatches, config: &Config) -> Result<Job, GenplotError> {
    let patterns: Vec<String> = matches
        .get_many::<String>("inputs")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let inputs = expand_inputs(&patterns)?;

    let column = matches.get_one::<usize>("column").copied().or(config.column);
    if let Some(column) = column {
        validate_column(column)?;
    }
    let mut load = LoadOptions::default().with_column(column);
    if let Some(prefix) = &config.comment_prefix {
        load = load.with_comment_prefix(prefix.clone());
    }

    let width = matches
        .get_one::<u32>("width")
        .copied()
        .or(config.width)
        .unwrap_or(crate::render::DEFAULT_SIZE.0);
    let height = matches
        .get_one::<u32>("height")
        .copied()
        .or(config.height)
        .unwrap_or(crate::render::DEFAULT_SIZE.1);
    validate_canvas_size("width", width)?;
    validate_canvas_size("height", height)?;

    let mut job = Job::new(inputs);
    job.load = load;
    job.labels = matches
        .get_many::<String>("labels")
        .map(|values| values.map(|v| v.trim().to_string()).collect());
    job.label_template = config
        .label_template
        .clone()
        .unwrap_or_else(|| DEFAULT_LABEL_TEMPLATE.to_string());
    job.summary = matches.get_flag("summary");
    job.print_table = matches.get_flag("print-table");
    job.plot = !matches.get_flag("no-plot");

    let string_opt = |name: &str, fallback: &Option<String>| {
        matches.get_one::<String>(name).cloned().or_else(|| fallback.clone())
    };

    let mut spec = job.spec.clone().with_size(width, height);
    if let Some(title) = string_opt("title", &config.title) {
        spec = spec.with_title(title);
    }
    let x_label = string_opt("x-label", &config.x_label).unwrap_or_else(|| spec.x_label.clone());
    let y_label = string_opt("y-label", &config.y_label).unwrap_or_else(|| spec.y_label.clone());
    spec = spec.with_axis_labels(x_label, y_label);

    let log_x = matches.get_flag("log-x") || config.log_x.unwrap_or(false);
    spec = spec.with_x_scale(if log_x { AxisScale::Log10 } else { AxisScale::Linear });
    spec = spec.with_markers(matches.get_flag("markers") || config.markers.unwrap_or(false));

    let output = string_opt("output", &config.output).unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    crate::config::validate_output(&output)?;
    job.spec = spec.with_output(output);

    job.validate()?;
    Ok(job)
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), GenplotError> {
    App::new().run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::error::{ConfigError, LoadError};
    use std::fs;
    use tempfile::TempDir;

    fn matches_for(args: &[&str]) -> ArgMatches {
        build_command().get_matches_from(std::iter::once(BIN_NAME).chain(args.iter().copied()))
    }

    fn input(dir: &TempDir, name: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, "1\n2\n3\n").unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_no_plot_requires_a_report() {
        let result = build_command().try_get_matches_from([BIN_NAME, "in.txt", "--no-plot"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );

        for report in ["--summary", "--print-table"] {
            let matches = matches_for(&["in.txt", "--no-plot", report]);
            assert!(matches.get_flag("no-plot"));
        }
    }

    #[test]
    fn test_get_verbosity() {
        let temp_dir = TempDir::new().unwrap();
        let a = input(&temp_dir, "a.txt");

        assert_eq!(get_verbosity(&matches_for(&[&a])), Verbosity::Normal);
        assert_eq!(get_verbosity(&matches_for(&["-q", &a])), Verbosity::Quiet);
        assert_eq!(get_verbosity(&matches_for(&["-s", &a])), Verbosity::Silent);
        assert_eq!(get_verbosity(&matches_for(&["-v", &a])), Verbosity::Verbose);
    }

    #[test]
    fn test_defaults_without_config() {
        let temp_dir = TempDir::new().unwrap();
        let a = input(&temp_dir, "a.txt");

        let job = build_job(&matches_for(&[&a]), &Config::default()).unwrap();
        assert_eq!(job.inputs.len(), 1);
        assert_eq!(job.spec.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(job.spec.x_scale, AxisScale::Linear);
        assert_eq!(job.label_template, DEFAULT_LABEL_TEMPLATE);
        assert!(job.labels.is_none());
        assert!(job.plot);
    }

    #[test]
    fn test_flags_override_config() {
        let temp_dir = TempDir::new().unwrap();
        let a = input(&temp_dir, "a.txt");
        let b = input(&temp_dir, "b.txt");
        let config = parse_config(
            "title: From config\nx_label: ms\nwidth: 640\noutput: cfg.png\nlog_x: true\n",
        )
        .unwrap();

        let matches = matches_for(&[
            &a,
            &b,
            "--title",
            "From flag",
            "--labels",
            "first, second",
            "-o",
            "flag.svg",
            "--height",
            "480",
        ]);
        let job = build_job(&matches, &config).unwrap();

        assert_eq!(job.spec.title, "From flag");
        assert_eq!(job.spec.x_label, "ms");
        assert_eq!(job.spec.width, 640);
        assert_eq!(job.spec.height, 480);
        assert_eq!(job.spec.output, PathBuf::from("flag.svg"));
        assert_eq!(job.spec.x_scale, AxisScale::Log10);
        assert_eq!(
            job.labels,
            Some(vec!["first".to_string(), "second".to_string()])
        );
    }

    #[test]
    fn test_label_count_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let a = input(&temp_dir, "a.txt");

        let result = build_job(&matches_for(&[&a, "-l", "x,y"]), &Config::default());
        assert!(matches!(
            result,
            Err(GenplotError::Config(ConfigError::LabelCount { .. }))
        ));
    }

    #[test]
    fn test_invalid_column_and_size() {
        let temp_dir = TempDir::new().unwrap();
        let a = input(&temp_dir, "a.txt");

        assert!(build_job(&matches_for(&[&a, "-c", "0"]), &Config::default()).is_err());
        assert!(build_job(&matches_for(&[&a, "--width", "5"]), &Config::default()).is_err());
    }

    #[test]
    fn test_unsupported_output_flag() {
        let temp_dir = TempDir::new().unwrap();
        let a = input(&temp_dir, "a.txt");

        let result = build_job(&matches_for(&[&a, "-o", "plot.tiff"]), &Config::default());
        assert!(matches!(result, Err(GenplotError::Config(_))));
    }

    #[test]
    fn test_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt").display().to_string();

        let result = build_job(&matches_for(&[&missing]), &Config::default());
        assert!(matches!(result, Err(GenplotError::Load(LoadError::Io { .. }))));
    }

    #[test]
    fn test_config_column_and_comment_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let a = input(&temp_dir, "a.txt");
        let config = parse_config("column: 2\ncomment_prefix: '%'\n").unwrap();

        let job = build_job(&matches_for(&[&a]), &config).unwrap();
        assert_eq!(job.load.column, Some(2));
        assert_eq!(job.load.comment_prefix, "%");

        let job = build_job(&matches_for(&[&a, "--column", "3"]), &config).unwrap();
        assert_eq!(job.load.column, Some(3));
    }
}
