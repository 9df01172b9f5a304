use argh::FromArgs;
use patricia_dict::{ComparisonInfo, PatriciaTrie};
use std::{
    error::Error,
    fmt::Display,
    fs::OpenOptions,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Look up suburb names read from stdin, falling back to the closest match
#[derive(FromArgs)]
struct SuburbSearch {
    /// the byte separating columns of the input file
    #[argh(option, default = "','")]
    delimiter: char,

    /// treat the first line of the input file as a record, not a header
    #[argh(switch)]
    no_header: bool,

    /// scan every stored name for the closest one, even on an exact match
    #[argh(switch)]
    closest: bool,

    /// delimited file whose first column is the suburb name
    #[argh(positional)]
    input_file: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: SuburbSearch = argh::from_env();

    let input_file = OpenOptions::new().read(true).open(&args.input_file)?;
    let trie = load_records(BufReader::new(input_file), args.delimiter, !args.no_header)?;
    if trie.is_empty() {
        return Err(Box::new(EmptyInputError(args.input_file)));
    }
    info!(records = trie.len(), "loaded dictionary");

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    for query in io::stdin().lock().lines() {
        let query = query?;
        let query = query.trim_end_matches('\r');
        let mut comparisons = ComparisonInfo::new();

        let found = if args.closest {
            trie.find_closest(query, &mut comparisons)
                .map(|closest| (closest.key, closest.record))
        } else {
            trie.search_entry(query, &mut comparisons)
        };

        match found {
            Some((key, record)) => {
                writeln!(
                    output,
                    "{query} --> {} {comparisons}",
                    String::from_utf8_lossy(key)
                )?;
                writeln!(output, "{record}")?;
            },
            None => writeln!(output, "{query} --> NOTFOUND")?,
        }
    }

    output.flush()?;

    Ok(())
}

/// Build the dictionary keyed by the first column, keeping each full line as
/// the record.
fn load_records(
    input: impl BufRead,
    delimiter: char,
    skip_header: bool,
) -> io::Result<PatriciaTrie<String>> {
    let mut trie = PatriciaTrie::new();

    for line in input.lines().skip(usize::from(skip_header)) {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let name = line.split(delimiter).next().unwrap_or(line);
        if let Some(previous) = trie.insert(name, line.to_owned()) {
            info!(name, %previous, "replaced duplicate record");
        }
    }

    Ok(trie)
}

#[derive(Debug)]
struct EmptyInputError(PathBuf);

impl Display for EmptyInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "There were no records to load from [{}]!",
            self.0.display()
        )
    }
}

impl Error for EmptyInputError {}
