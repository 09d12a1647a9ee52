// Lectura de planillas de asistencia (xlsx/xls/ods) a registros por asignatura.

use std::path::Path;
use calamine::{open_workbook_auto, Data, Reader};
use log::{debug, warn};
use crate::models::SubjectRecord;

/// Convierte un `Data` de calamine a String
pub fn data_to_string(d: &Data) -> String {
    match d {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => if *b { "1".to_string() } else { "0".to_string() },
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Índices de columna detectados en la fila de encabezados.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceColumns {
    pub subject: usize,
    pub attend: usize,
    pub total: usize,
}

/// Busca las columnas por palabras clave (español o inglés). Si no se
/// encuentra la de asignatura se usa la primera columna libre; sin columna
/// libre no hay detección.
pub fn detect_columns(headers: &[String]) -> Option<AttendanceColumns> {
    let mut idx_subject: Option<usize> = None;
    let mut idx_attend: Option<usize> = None;
    let mut idx_total: Option<usize> = None;
    for (i, h) in headers.iter().enumerate() {
        let h = h.trim().to_lowercase();
        if idx_subject.is_none()
            && (h.contains("subject") || h.contains("asignatura") || h == "ramo" || h.contains("codigo") || h.contains("nombre"))
        {
            idx_subject = Some(i);
        } else if idx_attend.is_none() && (h.contains("attend") || h.contains("asist")) {
            idx_attend = Some(i);
        } else if idx_total.is_none() && (h.contains("total") || h.contains("dictad") || h.contains("conduct")) {
            idx_total = Some(i);
        }
    }

    let attend = idx_attend?;
    let total = idx_total?;
    let subject = match idx_subject {
        Some(i) => i,
        None => (0..headers.len()).find(|&i| i != attend && i != total)?,
    };
    Some(AttendanceColumns { subject, attend, total })
}

fn parse_count(raw: &str) -> Option<u64> {
    let v: f64 = raw.trim().replace(',', ".").parse().ok()?;
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 { Some(v as u64) } else { None }
}

/// Convierte filas ya extraídas (la primera es el encabezado) en registros.
/// Las filas sin etiqueta se ignoran; una cantidad que no sea entero no
/// negativo es un error con el número de fila (1-based, como en la planilla).
pub fn records_from_rows(rows: &[Vec<String>]) -> Result<Vec<SubjectRecord>, Box<dyn std::error::Error>> {
    let Some(header) = rows.first() else { return Ok(Vec::new()) };
    let cols = detect_columns(header).ok_or("attendance sheet needs 'attended' and 'total' columns")?;
    debug!("attendance columns detected: {:?}", cols);

    let mut out = Vec::new();
    for (i, row) in rows.iter().enumerate().skip(1) {
        let cell = |idx: usize| row.get(idx).map(|s| s.as_str()).unwrap_or("");
        let subject = cell(cols.subject).trim();
        if subject.is_empty() {
            continue;
        }
        let attend = parse_count(cell(cols.attend))
            .ok_or_else(|| format!("row {}: invalid attended value '{}'", i + 1, cell(cols.attend)))?;
        let total = parse_count(cell(cols.total))
            .ok_or_else(|| format!("row {}: invalid total value '{}'", i + 1, cell(cols.total)))?;
        out.push(SubjectRecord::new(subject, attend, total));
    }
    Ok(out)
}

/// Lee la primera hoja de una planilla de asistencia.
pub fn read_attendance<P: AsRef<Path>>(path: P) -> Result<Vec<SubjectRecord>, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();
    let Some(primera) = sheet_names.first() else {
        warn!("workbook {} has no sheets", path.display());
        return Ok(Vec::new());
    };

    let range = workbook.worksheet_range(primera)?;
    let rows: Vec<Vec<String>> = range.rows().map(|r| r.iter().map(data_to_string).collect()).collect();
    records_from_rows(&rows)
}
