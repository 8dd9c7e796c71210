pub mod outfile;
pub mod plot;
