//! Scatter plot of `k` against `observed_kmers / possible_kmers`, written as a
//! single-page vector PDF.

use crate::error::Result;
use crate::stats::StatsTable;
use log::info;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

/// Page size in points (6 x 4 inch).
const WIDTH: f64 = 432.0;
const HEIGHT: f64 = 288.0;
const LEFT: f64 = 60.0;
const BOTTOM: f64 = 45.0;
const RIGHT: f64 = 20.0;
const TOP: f64 = 20.0;
const POINT_RADIUS: f64 = 2.0;
const FONT_SIZE: f64 = 9.0;

/// `<label>_proportion_kmers.pdf`
pub fn plot_path(label: &str) -> PathBuf {
    PathBuf::from(format!("{label}_proportion_kmers.pdf"))
}

/// Write the plot of `table` to [`plot_path`]`(label)` and return that path.
pub fn render(table: &StatsTable, label: &str) -> Result<PathBuf> {
    let path = plot_path(label);
    let mut file = BufWriter::new(File::create(&path)?);
    write_pdf(table, &mut file)?;
    file.flush()?;
    info!("Wrote {path:?}");
    Ok(path)
}

pub fn write_pdf(table: &StatsTable, mut out: impl Write) -> Result<()> {
    let content = plot_content(table);
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {WIDTH} {HEIGHT}] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
    ];

    let mut buf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, object) in objects.iter().enumerate() {
        offsets.push(buf.len());
        write!(buf, "{} 0 obj\n{object}\nendobj\n", i + 1)?;
    }
    let xref = buf.len();
    // Every xref entry is exactly 20 bytes.
    write!(buf, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1)?;
    for offset in offsets {
        write!(buf, "{offset:010} 00000 n \n")?;
    }
    write!(
        buf,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
        objects.len() + 1
    )?;
    out.write_all(&buf)?;
    Ok(())
}

/// PDF drawing operators, one per line.
#[derive(Default)]
struct Canvas {
    ops: Vec<String>,
}

impl Canvas {
    fn line(&mut self, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) {
        self.ops
            .push(format!("{x1:.2} {y1:.2} m {x2:.2} {y2:.2} l S"));
    }

    fn text(&mut self, (x, y): (f64, f64), s: &str) {
        self.ops
            .push(format!("BT /F1 {FONT_SIZE} Tf {x:.2} {y:.2} Td ({s}) Tj ET"));
    }

    /// Text running bottom to top.
    fn vertical_text(&mut self, (x, y): (f64, f64), s: &str) {
        self.ops.push(format!(
            "BT /F1 {FONT_SIZE} Tf 0 1 -1 0 {x:.2} {y:.2} Tm ({s}) Tj ET"
        ));
    }

    /// Filled circle from four Bezier arcs.
    fn dot(&mut self, (x, y): (f64, f64)) {
        let r = POINT_RADIUS;
        let c = 0.5523 * r;
        let p = |dx: f64, dy: f64| format!("{:.2} {:.2}", x + dx, y + dy);
        self.ops.push(format!(
            "{} m {} {} {} c {} {} {} c {} {} {} c {} {} {} c f",
            p(r, 0.0),
            p(r, c),
            p(c, r),
            p(0.0, r),
            p(-c, r),
            p(-r, c),
            p(-r, 0.0),
            p(-r, -c),
            p(-c, -r),
            p(0.0, -r),
            p(c, -r),
            p(r, -c),
            p(r, 0.0),
        ));
    }
}

/// Distance between x-axis ticks: the smallest of 1, 2, 5, 10, 20, .. that
/// leaves at most five ticks.
fn tick_step(n: usize) -> usize {
    let mut magnitude = 1;
    loop {
        for m in [1, 2, 5] {
            if n / (m * magnitude) <= 5 {
                return m * magnitude;
            }
        }
        magnitude *= 10;
    }
}

fn plot_content(table: &StatsTable) -> String {
    let (w, h) = (WIDTH - LEFT - RIGHT, HEIGHT - BOTTOM - TOP);
    let n = table.len();

    // Pad both ranges by 5% so points on the bounds stay inside the frame.
    let span = (n.max(2) - 1) as f64;
    let sx = |k: f64| LEFT + (k - 1.0 + 0.05 * span) / (1.1 * span) * w;
    let sy = |p: f64| BOTTOM + (p + 0.05) / 1.1 * h;

    let mut canvas = Canvas::default();
    canvas.ops.push("0.5 w 0 G 0 g".to_string());
    canvas
        .ops
        .push(format!("{LEFT:.2} {BOTTOM:.2} {w:.2} {h:.2} re S"));

    for i in 0..=4 {
        let p = i as f64 / 4.0;
        let y = sy(p);
        canvas.line((LEFT - 4.0, y), (LEFT, y));
        canvas.text((LEFT - 28.0, y - 3.0), &format!("{p:.2}"));
    }

    let step = tick_step(n);
    for k in (step..=n).step_by(step) {
        let x = sx(k as f64);
        canvas.line((x, BOTTOM - 4.0), (x, BOTTOM));
        let label = k.to_string();
        canvas.text((x - 2.5 * label.len() as f64, BOTTOM - 14.0), &label);
    }

    canvas.text((LEFT + w / 2.0, 10.0), "k");
    canvas.vertical_text((16.0, BOTTOM + h / 2.0 - 60.0), "observed_kmers/possible_kmers");

    for row in table.iter() {
        canvas.dot((sx(row.k as f64), sy(row.proportion())));
    }

    canvas.ops.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_statistics;

    fn dots(content: &str) -> usize {
        content.lines().filter(|l| l.ends_with(" c f")).count()
    }

    #[test]
    fn one_dot_per_row() {
        let table = compute_statistics(b"ATTTGGATT");
        assert_eq!(dots(&plot_content(&table)), 9);
        assert_eq!(dots(&plot_content(&StatsTable::default())), 0);
    }

    #[test]
    fn tick_steps() {
        assert_eq!(tick_step(0), 1);
        assert_eq!(tick_step(5), 1);
        assert_eq!(tick_step(9), 2);
        assert_eq!(tick_step(25), 5);
        assert_eq!(tick_step(1000), 200);
    }

    #[test]
    fn pdf_structure() {
        let table = compute_statistics(b"GATTACA");
        let mut pdf = vec![];
        write_pdf(&table, &mut pdf).unwrap();
        let text = String::from_utf8(pdf).unwrap();
        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));

        // startxref points at the xref table.
        let startxref = text.rfind("startxref\n").unwrap();
        let offset: usize = text[startxref + 10..]
            .lines()
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert!(text[offset..].starts_with("xref\n0 6\n"));

        // Every object offset points at its header.
        let entries = text[offset..].lines().skip(3).take(5);
        for (i, entry) in entries.enumerate() {
            let at: usize = entry[..10].parse().unwrap();
            assert!(text[at..].starts_with(&format!("{} 0 obj", i + 1)));
        }
    }

    #[test]
    fn plot_path_suffix() {
        assert_eq!(
            plot_path("data/seq.txt"),
            PathBuf::from("data/seq.txt_proportion_kmers.pdf")
        );
    }
}
