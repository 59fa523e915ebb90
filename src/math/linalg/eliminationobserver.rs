use std::io::{
    self,
    Stdout,
    Write
};

use nalgebra::DMatrix;

/// 消去過程的觀察者。
///
/// 求解器只在兩個時間點通知：建立增廣矩陣 [A | b] 之後，
/// 以及每消去一列之後。觀察者不能修改矩陣。
pub trait EliminationObserver {
    fn on_augmented(&mut self, _augmented: &DMatrix<f64>) {}

    fn on_row_eliminated(&mut self, _row: usize, _column: usize, _augmented: &DMatrix<f64>) {}
}

pub struct SilentObserver;

impl EliminationObserver for SilentObserver {}

// ─────────────────────────────────────────────
// TracePrinter
// ─────────────────────────────────────────────

pub struct TracePrinter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl TracePrinter<Stdout> {
    pub fn stdout() -> TracePrinter<Stdout> {
        TracePrinter::new(io::stdout())
    }
}

impl<W: Write> TracePrinter<W> {
    pub fn new(writer: W) -> TracePrinter<W> {
        TracePrinter { writer, error: None }
    }

    /// 第一個寫入失敗；之後的輸出全部略過
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, header: &str, augmented: &DMatrix<f64>) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = write_matrix(&mut self.writer, header, augmented) {
            self.error = Some(error);
        }
    }
}

fn write_matrix<W: Write>(writer: &mut W, header: &str, augmented: &DMatrix<f64>) -> io::Result<()> {
    writeln!(writer, "{header}")?;
    for row in augmented.row_iter() {
        for v in row.iter() {
            write!(writer, "{v:>10.4} ")?;
        }
        writeln!(writer)?;
    }
    writeln!(writer, "-------------------------------")
}

impl<W: Write> EliminationObserver for TracePrinter<W> {
    fn on_augmented(&mut self, augmented: &DMatrix<f64>) {
        self.emit("augmented matrix [A|b] before elimination:", augmented);
    }

    fn on_row_eliminated(&mut self, row: usize, column: usize, augmented: &DMatrix<f64>) {
        let header = format!("after eliminating row {row}, column {column}:");
        self.emit(&header, augmented);
    }
}

// ─────────────────────────────────────────────
// TraceRecorder
// ─────────────────────────────────────────────

/// 保存每一步的增廣矩陣快照，第 0 筆為消去前的 [A | b]。
#[derive(Default)]
pub struct TraceRecorder {
    snapshots: Vec<DMatrix<f64>>,
}

impl TraceRecorder {
    pub fn new() -> TraceRecorder {
        TraceRecorder::default()
    }

    pub fn snapshots(&self) -> &[DMatrix<f64>] {
        &self.snapshots
    }
}

impl EliminationObserver for TraceRecorder {
    fn on_augmented(&mut self, augmented: &DMatrix<f64>) {
        self.snapshots.push(augmented.clone());
    }

    fn on_row_eliminated(&mut self, _row: usize, _column: usize, augmented: &DMatrix<f64>) {
        self.snapshots.push(augmented.clone());
    }
}
