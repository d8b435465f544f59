//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "piledriver", about = "corpus sampling and annotation tool.")]
/// Holds every command that is callable by the `piledriver` command.
pub enum Piledriver {
    #[structopt(about = "Download a Common Pile subset sample")]
    Fetch(Fetch),
    #[structopt(about = "Inspect a downloaded sample")]
    Inspect(Inspect),
    #[structopt(about = "Run the annotation pipeline")]
    Parse(Parse),
    #[structopt(about = "Tally an annotated output file")]
    Validate(Validate),
}

#[derive(Debug, StructOpt)]
/// Fetch command and parameters.
///
/// Retrieves a named Common Pile subset, samples it with a fixed seed
/// and writes a gzip-compressed JSONL sample file.
pub struct Fetch {
    #[structopt(
        long = "subset",
        default_value = "arxiv_abstracts_filtered",
        help = "name of the Common Pile filtered subset"
    )]
    pub subset: String,
    #[structopt(
        long = "sample_size",
        default_value = "1000",
        help = "number of rows to sample from the subset"
    )]
    pub sample_size: usize,
    #[structopt(
        parse(from_os_str),
        long = "output",
        default_value = "sample_commonpile.jsonl.gz",
        help = "sample destination"
    )]
    pub output: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Inspect command and parameters.
pub struct Inspect {
    #[structopt(parse(from_os_str), help = "sample location")]
    pub sample: PathBuf,
    #[structopt(
        long = "head",
        help = "also preview the first n documents (text truncated)"
    )]
    pub head: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Parse command and parameters.
///
/// ```sh
/// piledriver-parse 0.1.0
/// Run the annotation pipeline
///
/// USAGE:
///     piledriver parse [FLAGS] [OPTIONS] --sample <sample>
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///         --use-gpu    ask the annotation backend for GPU execution
///
/// OPTIONS:
///         --dst <dst>                base output directory [default: conll]
///         --sample <sample>          sample location
///         --slice-size <slice-size>  rows per output slice [default: 9999]
///         --subset <subset>          subset name used in output paths [default: arxiv]
/// ```
pub struct Parse {
    #[structopt(parse(from_os_str), long = "sample", help = "sample location")]
    pub sample: PathBuf,
    #[structopt(
        long = "subset",
        default_value = "arxiv",
        help = "subset name used in output paths"
    )]
    pub subset: String,
    #[structopt(
        long = "slice-size",
        default_value = "9999",
        help = "rows per output slice"
    )]
    pub slice_size: usize,
    #[structopt(long = "use-gpu", help = "ask the annotation backend for GPU execution")]
    pub use_gpu: bool,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        default_value = "conll",
        help = "base output directory"
    )]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Validate command and parameters.
pub struct Validate {
    #[structopt(parse(from_os_str), help = "annotated output file (.conllu)")]
    pub file: PathBuf,
}
