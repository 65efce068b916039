use digraph_adt::graph::load_from_file;
use digraph_adt::report::{write_report, ReportConfig};
use digraph_adt::Digraph;
use std::env;
use std::io::{self, Write};

const USAGE: &str = "usage: digraph_report <graph-file> [source-vertex] [--paths] [--json]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let mut path = None;
    let mut config = ReportConfig::default();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--paths" => config = config.with_paths(true),
            "--json" => config = config.with_json(true),
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ if path.is_none() => path = Some(arg),
            _ => config = config.with_source(arg.parse()?),
        }
    }

    let path = match path {
        Some(path) => path,
        None => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let graph: Digraph = load_from_file(&path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&graph, &config, &mut out)?;
    out.flush()?;

    Ok(())
}
