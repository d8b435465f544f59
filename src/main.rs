//! # Piledriver
//!
//! Piledriver samples a Common Pile subset and annotates it into CoNLL-U files.
//!
//! This project can be used both as a tool to fetch and annotate corpus samples,
//! or as a lib to integrate sampling and annotation into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! piledriver 0.1.0
//! corpus sampling and annotation tool.
//!
//! USAGE:
//!     piledriver <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     fetch       Download a Common Pile subset sample
//!     help        Prints this message or the help of the given subcommand(s)
//!     inspect     Inspect a downloaded sample
//!     parse       Run the annotation pipeline
//!     validate    Tally an annotated output file
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

use piledriver::cli;
use piledriver::error::Error;
use piledriver::fetching::{sample_rows, Fetcher, SAMPLE_SEED};
use piledriver::io::writer::SampleWriter;
use piledriver::pipelines::{Conllu, Pipeline};
use piledriver::{inspect, validate};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Piledriver::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Piledriver::Fetch(f) => {
            if f.sample_size == 0 {
                return Err(Error::Custom(
                    "sample size must be positive".to_string(),
                ));
            }

            info!("loading subset: {}", f.subset);
            let fetcher = Fetcher::new(&f.subset);
            let rows = fetcher.fetch()?;

            info!("sampling {} of {} rows", f.sample_size.min(rows.len()), rows.len());
            let sample = sample_rows(rows, f.sample_size, SAMPLE_SEED);

            let mut writer = SampleWriter::create(&f.output)?;
            writer.write(&sample)?;
            writer.finish()?;
            info!("wrote {} rows to {:?}", sample.len(), f.output);
        }

        cli::Piledriver::Inspect(i) => {
            let summary = inspect::summarize(&i.sample, i.head.unwrap_or(0))?;
            println!("{}", summary);
        }

        cli::Piledriver::Parse(p) => {
            let p = Conllu::new(p.sample, p.dst, p.subset, p.slice_size, p.use_gpu);
            p.run()?;
        }

        cli::Piledriver::Validate(v) => {
            let report = validate::validate_file(&v.file)?;
            println!("{}", report);
        }
    };
    Ok(())
}
