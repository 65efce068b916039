//! Flat text persistence for graphs.
//!
//! ```text
//! <mode>                  1 = directed, 0 = undirected
//! <vertex_count> <edge_count>
//! <vertex_key>            one line per vertex
//! <from> <to> <cost>      one line per logical edge
//! ```
//!
//! Blank lines are ignored. An undirected edge is written once, with `from < to`,
//! and loading it materializes both directions again.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use crate::graph::{Digraph, Graph, Mode, MutableGraph, VertexKey, Weight};
use crate::{Error, Result};

/// Loads a graph from a file in the text format
pub fn load_from_file<W, P>(path: P) -> Result<Digraph<W>>
where
    W: Weight,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    match read_from(BufReader::new(file)) {
        Ok(graph) => {
            debug!(
                "loaded {} from {}: {} vertices, {} edges",
                graph.mode(),
                path.display(),
                graph.vertex_count(),
                graph.edge_count()
            );
            Ok(graph)
        }
        Err(err) => {
            warn!("discarding graph from {}: {}", path.display(), err);
            Err(err)
        }
    }
}

/// Stores a graph into a file in the text format, replacing any previous content
pub fn store_to_file<W, G, P>(graph: &G, path: P) -> Result<()>
where
    W: Weight,
    G: Graph<W>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write_to::<W, G, _>(graph, &mut writer)?;
    writer.flush()?;

    debug!(
        "stored {} vertices and {} edges to {}",
        graph.vertex_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(())
}

/// Parses a graph from any buffered reader
pub fn read_from<W, R>(reader: R) -> Result<Digraph<W>>
where
    W: Weight,
    R: BufRead,
{
    let mut records = Records::new(reader);

    let (line, fields) = records.next_record("graph mode")?;
    let [flag] = expect_fields::<1>(line, &fields, "graph mode")?;
    let mode = Mode::from_flag(parse_field(line, flag, "graph mode")?).ok_or_else(|| {
        Error::Malformed {
            line,
            reason: format!("unknown graph mode {}", flag),
        }
    })?;

    let (line, fields) = records.next_record("vertex and edge counts")?;
    let [vertices, edges] = expect_fields::<2>(line, &fields, "vertex and edge counts")?;
    let vertex_count: usize = parse_field(line, vertices, "vertex count")?;
    let edge_count: usize = parse_field(line, edges, "edge count")?;

    let mut graph = Digraph::new(mode);

    for _ in 0..vertex_count {
        let (line, fields) = records.next_record("vertex")?;
        let [key] = expect_fields::<1>(line, &fields, "vertex")?;
        let key: VertexKey = parse_field(line, key, "vertex key")?;
        graph
            .insert_vertex(key)
            .map_err(|err| rejected(line, err))?;
    }

    for _ in 0..edge_count {
        let (line, fields) = records.next_record("edge")?;
        let [from, to, cost] = expect_fields::<3>(line, &fields, "edge")?;
        let from: VertexKey = parse_field(line, from, "edge origin")?;
        let to: VertexKey = parse_field(line, to, "edge destination")?;
        let cost: W = parse_field(line, cost, "edge cost")?;
        graph
            .insert_edge(from, to, cost)
            .map_err(|err| rejected(line, err))?;
    }

    Ok(graph)
}

/// Serializes a graph into any writer
pub fn write_to<W, G, O>(graph: &G, out: &mut O) -> Result<()>
where
    W: Weight,
    G: Graph<W>,
    O: Write,
{
    let mode = graph.mode();
    writeln!(out, "{}", mode.as_flag())?;
    writeln!(out, "{} {}", graph.vertex_count(), graph.edge_count())?;

    for vertex in graph.vertices() {
        writeln!(out, "{}", vertex)?;
    }

    for from in graph.vertices() {
        for (to, cost) in graph.outgoing_edges(from) {
            if mode == Mode::Undirected && to < from {
                continue;
            }
            writeln!(out, "{} {} {}", from, to, cost)?;
        }
    }

    Ok(())
}

/// Non-blank lines of the input, split into whitespace separated fields
struct Records<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> Records<R> {
    fn new(reader: R) -> Self {
        Records {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Returns the next non-blank line number and its fields
    fn next_record(&mut self, expected: &str) -> Result<(usize, Vec<String>)> {
        for text in self.lines.by_ref() {
            let text = text?;
            self.line += 1;
            let fields: Vec<String> = text.split_whitespace().map(str::to_owned).collect();
            if !fields.is_empty() {
                return Ok((self.line, fields));
            }
        }

        Err(Error::Malformed {
            line: self.line + 1,
            reason: format!("unexpected end of input, expected {}", expected),
        })
    }
}

fn expect_fields<'a, const N: usize>(
    line: usize,
    fields: &'a [String],
    what: &str,
) -> Result<[&'a str; N]> {
    if fields.len() != N {
        return Err(Error::Malformed {
            line,
            reason: format!("expected {} field(s) for {}, found {}", N, what, fields.len()),
        });
    }

    let mut out = [""; N];
    for (slot, field) in out.iter_mut().zip(fields) {
        *slot = field.as_str();
    }
    Ok(out)
}

fn parse_field<T>(line: usize, field: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    field.parse().map_err(|err| Error::Malformed {
        line,
        reason: format!("invalid {} {:?}: {}", what, field, err),
    })
}

fn rejected(line: usize, err: Error) -> Error {
    Error::Malformed {
        line,
        reason: err.to_string(),
    }
}
