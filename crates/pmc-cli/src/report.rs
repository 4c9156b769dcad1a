use std::io::{self, Write};

use pmc_matrix::{Matrix, Operands, ResultSet};

fn write_section(out: &mut impl Write, banner: &str, matrix: &Matrix) -> io::Result<()> {
    writeln!(out, "{}", banner)?;
    write!(out, "{}", matrix)?;
    writeln!(out)
}

/// Print both inputs, each under its own banner.
pub fn write_inputs(out: &mut impl Write, operands: &Operands) -> io::Result<()> {
    writeln!(out)?;
    write_section(out, "=========== MATRIX A ===========", operands.a())?;
    write_section(out, "=========== MATRIX B ===========", operands.b())
}

/// Print the results banner followed by sum, difference, and product.
pub fn write_results(out: &mut impl Write, results: &ResultSet) -> io::Result<()> {
    writeln!(out, "\n================ RESULTS ================\n")?;
    write_section(out, "-------- Sum (A + B) --------", &results.sum)?;
    write_section(out, "------ Difference (A - B) ------", &results.difference)?;
    write_section(
        out,
        "------ Product (Matrix Multiplication) ------",
        &results.product,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<i32>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_inputs_layout() {
        let ops = Operands::new(m(vec![vec![1]]), m(vec![vec![2]])).unwrap();
        let mut buf = Vec::new();
        write_inputs(&mut buf, &ops).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "\n=========== MATRIX A ===========\n    1\n\n=========== MATRIX B ===========\n    2\n\n"
        );
    }

    #[test]
    fn test_results_order() {
        let results = ResultSet {
            sum: m(vec![vec![3]]),
            difference: m(vec![vec![-1]]),
            product: m(vec![vec![2]]),
        };
        let mut buf = Vec::new();
        write_results(&mut buf, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let sum = text.find("Sum (A + B)").unwrap();
        let diff = text.find("Difference (A - B)").unwrap();
        let prod = text.find("Product (Matrix Multiplication)").unwrap();
        assert!(text.starts_with("\n================ RESULTS"));
        assert!(sum < diff && diff < prod);
        assert!(text.contains("   -1\n"));
    }
}
