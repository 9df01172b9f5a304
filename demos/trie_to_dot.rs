use argh::FromArgs;
use patricia_dict::{visitor::DotPrinter, PatriciaTrie};
use std::{
    error::Error,
    fmt::Display,
    fs::OpenOptions,
    io::{self, BufWriter, Write},
    str::FromStr,
};

#[derive(FromArgs)]
/// Render a generated trie in graphviz dot format.
struct TrieToDotArgs {
    /// what shape of trie to generate
    #[argh(positional)]
    shape: TrieShape,

    /// how many keys to insert
    #[argh(positional)]
    size: usize,

    /// where to output the trie diagram
    ///
    /// To output to stdout, use '_'.
    #[argh(positional)]
    output_location: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: TrieToDotArgs = argh::from_env();

    let trie: PatriciaTrie<usize> = args
        .shape
        .generate_keys(args.size)
        .into_iter()
        .zip(0..)
        .collect();

    let Some(root) = trie.root() else {
        return Err(Box::new(EmptyTrieError));
    };

    if args.output_location == "_" {
        let stdout = io::stdout();
        let handle = stdout.lock();

        let mut buffer = BufWriter::new(handle);

        DotPrinter::print_tree(&mut buffer, root)?;
        buffer.flush()?;
    } else {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(args.output_location)?;

        let mut buffer = BufWriter::new(file);

        DotPrinter::print_tree(&mut buffer, root)?;
        buffer.flush()?;
    }

    Ok(())
}

#[derive(Debug)]
enum TrieShape {
    Skewed,
    Nested,
    Suburbs,
}

impl TrieShape {
    fn generate_keys(self, size: usize) -> Vec<Vec<u8>> {
        match self {
            // z, az, aaz, ...
            TrieShape::Skewed => (0..size)
                .map(|len| {
                    let mut key = vec![b'a'; len];
                    key.push(b'z');
                    key
                })
                .collect(),
            // a, aa, aaa, ...
            TrieShape::Nested => (1..=size).map(|len| vec![b'a'; len]).collect(),
            TrieShape::Suburbs => SUBURBS
                .iter()
                .take(size)
                .map(|name| name.as_bytes().to_vec())
                .collect(),
        }
    }
}

const SUBURBS: &[&str] = &[
    "Abbotsford",
    "Brunswick",
    "Brunswick East",
    "Brunswick West",
    "Carlton",
    "Carlton North",
    "Fitzroy",
    "Fitzroy North",
    "Kew",
    "Kew East",
    "Richmond",
    "St Kilda",
    "St Kilda East",
];

impl FromStr for TrieShape {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skewed" => Ok(TrieShape::Skewed),
            "nested" => Ok(TrieShape::Nested),
            "suburbs" => Ok(TrieShape::Suburbs),
            _ => Err(ShapeParseError(s.into())),
        }
    }
}

#[derive(Debug)]
struct ShapeParseError(String);

impl Display for ShapeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unable to parse trie shape from argument value [{}].",
            self.0
        )
    }
}

#[derive(Debug)]
struct EmptyTrieError;

impl Display for EmptyTrieError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There were no keys to insert into the trie!")
    }
}

impl Error for EmptyTrieError {}
