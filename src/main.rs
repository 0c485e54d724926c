//! Stevedore CLI - send a compose configuration to the deployer service.

use clap::Parser;
use std::io::Read;
use std::path::Path;
use std::process;

use stevedore::cli::Cli;
use stevedore::{Error, deploy, git};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let version = match cli.version {
        Some(version) => version,
        None => git::head_revision(Path::new("."))?,
    };

    let url = deploy::build_url(&cli.host, &cli.api_endpoint, &cli.project, &version)?;
    let payload = read_configuration(&cli.configuration)?;

    eprintln!("POST {}", url);

    match deploy::send(&url, &cli.token, &payload) {
        Ok(()) => Ok(()),
        Err(Error::Rejected { status, body }) => {
            eprintln!("[ERROR] {} Error in HTTP response:", status);
            eprintln!("{}", body);
            process::exit(1);
        }
        Err(e) => Err(e),
    }
}

/// Read the configuration payload fully into memory, `-` meaning stdin.
fn read_configuration(path: &Path) -> Result<Vec<u8>, Error> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read(path)?)
    }
}
