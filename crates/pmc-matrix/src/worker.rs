use std::mem;

use crate::backend::Operands;
use crate::matrix::cell_of;
use crate::partition::WorkItem;

/// One worker's exclusive window into the three output buffers.
///
/// Each slice holds exactly `item.len()` cells; offset 0 corresponds to flat
/// index `item.start`.
#[derive(Debug)]
pub struct OutputSpan<'a> {
    pub item: WorkItem,
    sum: &'a mut [i32],
    difference: &'a mut [i32],
    product: &'a mut [i32],
}

impl<'a> OutputSpan<'a> {
    /// Carve the output buffers into one span per work item.
    ///
    /// `items` must be contiguous and start at 0, as produced by
    /// [`partition`](crate::partition::partition).
    ///
    /// # Panics
    /// Panics if the items cover more cells than the buffers hold.
    pub fn split(
        items: &[WorkItem],
        mut sum: &'a mut [i32],
        mut difference: &'a mut [i32],
        mut product: &'a mut [i32],
    ) -> Vec<OutputSpan<'a>> {
        let mut spans = Vec::with_capacity(items.len());
        let mut next = 0;
        for item in items {
            debug_assert_eq!(item.start, next, "work items must be contiguous");
            next = item.end;

            let (s, rest) = mem::take(&mut sum).split_at_mut(item.len());
            sum = rest;
            let (d, rest) = mem::take(&mut difference).split_at_mut(item.len());
            difference = rest;
            let (p, rest) = mem::take(&mut product).split_at_mut(item.len());
            product = rest;

            spans.push(OutputSpan {
                item: *item,
                sum: s,
                difference: d,
                product: p,
            });
        }
        spans
    }
}

/// Compute every cell of `span` from `operands`.
///
/// For flat index `idx` at `(row, col)`:
///   sum        = A[row][col] + B[row][col]
///   difference = A[row][col] - B[row][col]
///   product    = sum over k of A[row][k] * B[k][col]
pub fn compute_span(operands: &Operands, span: OutputSpan<'_>) {
    let a = operands.a();
    let b = operands.b();
    let dim = operands.dim();

    for (offset, idx) in span.item.range().enumerate() {
        let (row, col) = cell_of(idx, dim);
        let x = a[(row, col)];
        let y = b[(row, col)];

        span.sum[offset] = x.wrapping_add(y);
        span.difference[offset] = x.wrapping_sub(y);

        let a_row = a.row(row);
        let mut dot = 0i32;
        for (k, &a_rk) in a_row.iter().enumerate() {
            dot = dot.wrapping_add(a_rk.wrapping_mul(b[(k, col)]));
        }
        span.product[offset] = dot;
    }
}
