// matrust-console/src/input.rs

use anyhow::{bail, Context, Result};
use log::debug;
use matrust_core::Matrix;
use std::io::{BufRead, Write};

/// Reads a `rows x cols` matrix interactively, one element per line.
///
/// Each cell prompts with `Element [i,j]: `; a line that does not parse as
/// a number prints an error line and prompts the same cell again. Reaching
/// end of input before the matrix is complete is an error, never a
/// partially filled matrix.
///
/// The reader and the prompt sink are generic so the loop can be driven
/// from tests with in-memory buffers.
pub fn read_matrix<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    rows: usize,
    cols: usize,
) -> Result<Matrix<f64>> {
    let mut data = Vec::with_capacity(rows * cols);

    for i in 0..rows {
        for j in 0..cols {
            loop {
                write!(output, "Element [{},{}]: ", i, j).context("failed to write prompt")?;
                output.flush().context("failed to flush prompt")?;

                let mut line = String::new();
                let bytes_read = input
                    .read_line(&mut line)
                    .with_context(|| format!("failed to read element [{},{}]", i, j))?;
                if bytes_read == 0 {
                    bail!(
                        "input ended before the {}x{} matrix was complete (at element [{},{}])",
                        rows,
                        cols,
                        i,
                        j
                    );
                }

                match line.trim().parse::<f64>() {
                    Ok(value) => {
                        data.push(value);
                        break;
                    }
                    Err(_) => {
                        debug!(
                            "rejected non-numeric input {:?} for element [{},{}]",
                            line.trim(),
                            i,
                            j
                        );
                        writeln!(output, "Invalid value, please enter a number.")
                            .context("failed to write error line")?;
                    }
                }
            }
        }
    }

    Ok(Matrix::new(data, rows, cols)?)
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_matrix_ok() {
        let mut input = Cursor::new("1\n2.5\n-3\n4e1\n");
        let mut output = Vec::new();

        let m = read_matrix(&mut input, &mut output, 2, 2).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.5, -3.0, 40.0]);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Element [0,0]: "));
        assert!(transcript.contains("Element [1,1]: "));
    }

    #[test]
    fn test_read_matrix_reprompts_on_garbage() {
        let mut input = Cursor::new("1\nabc\n\n2\n3\n4\n");
        let mut output = Vec::new();

        let m = read_matrix(&mut input, &mut output, 2, 2).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

        let transcript = String::from_utf8(output).unwrap();
        // Two rejected lines for element [0,1]: "abc" and the blank one.
        assert_eq!(
            transcript
                .matches("Invalid value, please enter a number.")
                .count(),
            2
        );
        assert_eq!(transcript.matches("Element [0,1]: ").count(), 3);
    }

    #[test]
    fn test_read_matrix_eof_is_error() {
        let mut input = Cursor::new("1\n2\n");
        let mut output = Vec::new();

        let result = read_matrix(&mut input, &mut output, 2, 2);
        assert!(result.is_err());
        let message = format!("{}", result.err().unwrap());
        assert!(message.contains("input ended"));
        assert!(message.contains("[1,0]"));
    }

    #[test]
    fn test_read_matrix_whitespace_tolerant() {
        let mut input = Cursor::new("  7.5  \n\t8\n");
        let mut output = Vec::new();

        let m = read_matrix(&mut input, &mut output, 1, 2).unwrap();
        assert_eq!(m.as_slice(), &[7.5, 8.0]);
    }
}
