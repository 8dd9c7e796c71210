use clap::{Arg, Command};
use tracing::info;

use outplot::{outfile, plot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let matches = Command::new("outplot")
        .arg(
            Arg::new("outfile")
                .help("Path to the outfile to plot")
                .required(true)
                .index(1),
        )
        .get_matches();
    let path = matches.get_one::<String>("outfile").unwrap();

    println!("reading outfile `{}`", path);
    let outfile = outfile::load(path)?;

    println!("props {:?}", outfile.props);
    info!(
        "parsed {} properties and {} metric samples",
        outfile.props.len(),
        outfile.samples.len()
    );

    plot::show(&outfile.samples)?;
    Ok(())
}
