use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Parsed contents of an outfile: the run's configuration properties plus the
/// recorded metric samples in file order. The sample's position in the vector
/// is its time index.
#[derive(Debug, Default, PartialEq)]
pub struct Outfile {
    pub props: HashMap<String, i64>,
    pub samples: Vec<f64>,
}

#[derive(Debug)]
pub enum ParseError {
    Io(io::Error),
    /// Property line with more than one `=`; key/value extraction is ambiguous.
    Property { line_no: usize, line: String },
    /// Property value that is not a base-10 integer.
    IntValue { line_no: usize, key: String, value: String },
    /// Sample line that is not a base-10 float.
    Sample { line_no: usize, line: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(e) => write!(f, "failed to read outfile: {}", e),
            ParseError::Property { line_no, line } => {
                write!(f, "line {}: malformed property line '{}'", line_no, line)
            }
            ParseError::IntValue { line_no, key, value } => {
                write!(
                    f,
                    "line {}: property '{}' has non-integer value '{}'",
                    line_no, key, value
                )
            }
            ParseError::Sample { line_no, line } => {
                write!(f, "line {}: invalid metric sample '{}'", line_no, line)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Read an outfile stream into properties and samples.
///
/// A line containing `=` is a property: the text before the first `=` is the
/// key (kept verbatim), the text after it must parse as an integer. A second
/// `=` on the line is an error. Every other line must parse as a float and is
/// appended to the sample sequence. Duplicate keys keep the last value. The
/// first bad line aborts the parse; nothing partial is returned.
pub fn read_outfile<R: BufRead>(reader: R) -> Result<Outfile, ParseError> {
    let mut props = HashMap::new();
    let mut samples = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if let Some((key, value)) = line.split_once('=') {
            if value.contains('=') {
                return Err(ParseError::Property { line_no, line });
            }
            // Numeric text tolerates surrounding whitespace; the key does not.
            let parsed = value.trim().parse::<i64>().map_err(|_| ParseError::IntValue {
                line_no,
                key: key.to_string(),
                value: value.to_string(),
            })?;
            props.insert(key.to_string(), parsed);
        } else {
            let sample = line
                .trim()
                .parse::<f64>()
                .map_err(|_| ParseError::Sample { line_no, line })?;
            samples.push(sample);
        }
    }

    Ok(Outfile { props, samples })
}

/// Open `path` and parse it as an outfile.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Outfile, ParseError> {
    let file = fs::File::open(path)?;
    read_outfile(BufReader::new(file))
}
