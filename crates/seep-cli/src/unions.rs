//! Dynamic-connectivity client over a stream of `p q` pairs.

use std::io::{BufRead, Write};

use seep_forest::DisjointSetForest;

use crate::error::CliError;

/// Read whitespace-separated element pairs from `input`, union each into
/// an `n`-element forest, and echo to `output` every pair that joined two
/// separate components. Ends with a `<count> components` line.
///
/// Returns the final component count.
pub fn run_unions<R, W>(n: usize, input: R, output: &mut W) -> Result<usize, CliError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut forest = DisjointSetForest::new(n)?;
    let mut pending: Option<usize> = None;
    for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let element = token.parse::<usize>().map_err(|_| CliError::Parse {
                token: token.to_string(),
            })?;
            let Some(p) = pending.take() else {
                pending = Some(element);
                continue;
            };
            if forest.union_roots(p, element)?.is_some() {
                writeln!(output, "{p} {element}")?;
            }
        }
    }
    if let Some(element) = pending {
        return Err(CliError::UnpairedElement { element });
    }
    writeln!(output, "{} components", forest.count())?;
    Ok(forest.count())
}
