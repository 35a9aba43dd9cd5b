use std::process;

fn main() {
    if let Err(e) = cdf_genplotter::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
