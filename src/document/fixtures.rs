//! In-memory document builders for unit tests.

use lopdf::content::{Content, Operation};
use lopdf::{Object, Stream, dictionary};
use std::io::{Cursor, Write};

/// Build a PDF where each inner slice is one page and each string one text
/// object (one extracted line).
pub(crate) fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    let mut document = lopdf::Document::with_version("1.5");
    let pages_id = document.new_object_id();
    let font_id = document.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });

    let mut kids = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new(
                "Td",
                vec![72.into(), Object::Integer(720 - 16 * index as i64)],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = document.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(Object::from(page_id));
    }

    let count = kids.len() as i64;
    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = document.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    document.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    document.save_to(&mut bytes).expect("write pdf bytes");
    bytes
}

// Minimal workbook with one sheet ("Sheet1") and values:
// A1="Header", A2="Value", B2=42.
const MINIMAL_XLSX_BASE64: &str = "UEsDBBQAAAAIAJyhWlzD9b3EJQEAAC8DAAATAAAAW0NvbnRlbnRfVHlwZXNdLnhtbK1SS08CMRC+8yuaXsm24MEYswsHH0flgD+gtrNsQ1/pFIR/7+ziIzGgGD1Nmu/ZTuv5zju2hYw2hoZPxYQzCDoaG1YNf1reV1ecYVHBKBcDNHwPyOezUb3cJ0BG4oAN70pJ11Ki7sArFDFBIKSN2atCx7ySSem1WoG8mEwupY6hQChV6T34bMRYfQut2rjC7naEHLpkcMjZzYHbxzVcpeSsVoVwuQ3mS1D1FiJIOXCwswnHRODyVEgPns74lD7SE2VrgC1ULg/KE1HunHyJef0c41p873Oka2xbq8FEvfEkEZgyKIMdQPFODFN4ZcP4rAoDH+Uwpv/c5cP/hyokX+SYkLab4fcd3nfXq6tERpCLBTw3lNz/fG/ov4UBcyS+lsN/n70CUEsDBBQAAAAIAJyhWlxPY8Kx7AAAAFUCAAALAAAAX3JlbHMvLnJlbHOtks1OwzAMgO97isj3Nd0mIYSa7jIh7Tah8QAmcX/UNo4SA93bEyGBGGKwA8c49ufPlqvtPI3qhWLq2RtYFSUo8pZd71sDj8f75S2oJOgdjuzJwIkSbOtF9UAjSq5JXR+SyhCfDHQi4U7rZDuaMBUcyOefhuOEkp+x1QHtgC3pdVne6PiVAfVCqTOs2jsDce9WoI6nQNfguWl6Szu2zxN5+aHLt4xMxtiSGJhH/cpxeGIeigwFfVFnfb3O5Wn1RIIOBbXlSMsQc3WUPi/308ixPeRwes/4w2nznyuiWcg7cr9bYQgfUpU+u4b6DVBLAwQUAAAACACcoVpc1cMGTcEAAAAoAQAADwAAAHhsL3dvcmtib29rLnhtbI1Py47CMAy88xWR75CWwwpVbbkgJM67+wGhcWnUxq7ssI+/JwX1zskzGs14pj7+xcn8oGhgaqDcFWCQOvaBbg18f523BzCaHHk3MWED/6hwbDf1L8t4ZR5N9pM2MKQ0V9ZqN2B0uuMZKSs9S3QpU7lZnQWd1wExxcnui+LDRhcIXgmVvJPBfR86PHF3j0jpFSI4uZTb6xBmhXZjTP18ogtciSEXc/vPBZd50XIvPg8GI1XIQC6+BPt029Ve23Vl+wBQSwMEFAAAAAgAnKFaXPVgA4K3AAAALQEAABoAAAB4bC9fcmVscy93b3JrYm9vay54bWwucmVsc43PzQrCMAwH8PueouTusnkQkXW7iLCrzAcoXfaBW1ua+rG3t3gQBx48hSTkF/5F9ZwncSfPozUS8jQDQUbbdjS9hEtz2uxBcFCmVZM1JGEhhqpMijNNKsQbHkbHIiKGJQwhuAMi64Fmxal1ZOKms35WIba+R6f0VfWE2yzbof82oEyEWLGibiX4us1BNIujf3jbdaOmo9W3mUz48QUf1l95IAoRVb6nIOEzYnyXPI0qYAyJq5TlC1BLAwQUAAAACACcoVpc5Bkyr9IAAABVAQAAGAAAAHhsL3dvcmtzaGVldHMvc2hlZXQxLnhtbHWQT0vEQAzF7/sphtzddIuISDqLIuLdP/ehjdvBmUyZiV399k57WOzBQyDvhffjETp+x2BmzsUn6eCwb8Cw9Gnwcurg7fXp6hZMUSeDC0m4gx8ucLQ7Oqf8WUZmNRUgpYNRdbpDLP3I0ZV9mljq5SPl6LTKfMIyZXbDGooB26a5wei8gN0ZQ6v96NQtquqczibXQmCpX5b7AxjtwEvwwi+aq++LJbXPlcmZUC3h4mBfp6a3nPbCaf/hvLvwxVvMGnhYorO9bgnnLZ3wT2nCy0fsL1BLAwQUAAAACACcoVpcasaL7d8AAACJAQAAEQAAAGRvY1Byb3BzL2NvcmUueG1sbZBNS8RADIbv/ooy9zatgkiZdm+eFAQVvA6Z2B3sfDCJdvffO1u0LrjH5H3ykETvDn6uviizi2FQXdOqigJG68I0qNeX+/pOVSwmWDPHQIM6EqvdeKUx9RgzPeWYKIsjrooocI9pUHuR1AMw7skbbgoRSvgeszdSyjxBMvhhJoLrtr0FT2KsEQMnYZ02o/pRWtyU6TPPq8Ai0EyegjB0TQd/rFD2fHFgTc5I7+SY6CL6G270gd0GLsvSLDcrWvbv4O3x4Xk9tXbh9CokNWqLPWYyEvMoxKLhrKHh3/fGb1BLAwQUAAAACACcoVpcWQwavqkAAAAUAQAAEAAAAGRvY1Byb3BzL2FwcC54bWydzzELwjAQBeDdX1Gy11QHEUlbBHHuoO4hudpAcxeSs7T/3oigzo53Dz7eU+3sx2KCmBxhLTbrShSAhqzDey2ul3O5F0VijVaPhFCLBZJom5XqIgWI7CAVWcBUi4E5HKRMZgCv0zrHmJOeotecz3iX1PfOwInMwwOy3FbVTsLMgBZsGT6geIuHif9FLZlXv3S7LCF7jTqGMDqjOY9suoUHQiV/f0p+9zRPUEsBAhQDFAAAAAgAnKFaXMP1vcQlAQAALwMAABMAAAAAAAAAAAAAAIABAAAAAFtDb250ZW50X1R5cGVzXS54bWxQSwECFAMUAAAACACcoVpcT2PCsewAAABVAgAACwAAAAAAAAAAAAAAgAFWAQAAX3JlbHMvLnJlbHNQSwECFAMUAAAACACcoVpc1cMGTcEAAAAoAQAADwAAAAAAAAAAAAAAgAFrAgAAeGwvd29ya2Jvb2sueG1sUEsBAhQDFAAAAAgAnKFaXPVgA4K3AAAALQEAABoAAAAAAAAAAAAAAIABWQMAAHhsL19yZWxzL3dvcmtib29rLnhtbC5yZWxzUEsBAhQDFAAAAAgAnKFaXOQZMq/SAAAAVQEAABgAAAAAAAAAAAAAAIABSAQAAHhsL3dvcmtzaGVldHMvc2hlZXQxLnhtbFBLAQIUAxQAAAAIAJyhWlxqxovt3wAAAIkBAAARAAAAAAAAAAAAAACAAVAFAABkb2NQcm9wcy9jb3JlLnhtbFBLAQIUAxQAAAAIAJyhWlxZDBq+qQAAABQBAAAQAAAAAAAAAAAAAACAAV4GAABkb2NQcm9wcy9hcHAueG1sUEsFBgAAAAAHAAcAwgEAADUHAAAAAA==";

pub(crate) fn minimal_xlsx() -> Vec<u8> {
    decode_base64(MINIMAL_XLSX_BASE64)
}

fn decode_base64(input: &str) -> Vec<u8> {
    fn decode_char(character: u8) -> Option<u8> {
        match character {
            b'A'..=b'Z' => Some(character - b'A'),
            b'a'..=b'z' => Some(character - b'a' + 26),
            b'0'..=b'9' => Some(character - b'0' + 52),
            b'+' => Some(62),
            b'/' => Some(63),
            _ => None,
        }
    }

    let mut output = Vec::new();
    for chunk in input.as_bytes().chunks(4) {
        if chunk.len() < 4 {
            break;
        }

        let pad = chunk.iter().rev().take_while(|byte| **byte == b'=').count();
        let sextets: Vec<u32> = chunk
            .iter()
            .map(|byte| {
                if *byte == b'=' {
                    0
                } else {
                    decode_char(*byte).expect("valid base64") as u32
                }
            })
            .collect();
        let triple = (sextets[0] << 18) | (sextets[1] << 12) | (sextets[2] << 6) | sextets[3];
        output.push(((triple >> 16) & 0xff) as u8);
        if pad < 2 {
            output.push(((triple >> 8) & 0xff) as u8);
        }
        if pad < 1 {
            output.push((triple & 0xff) as u8);
        }
    }

    output
}

/// Build an xlsx workbook with one worksheet per outer slice. Cells are
/// inline strings; a `=num:` prefix writes a numeric cell instead and an
/// empty string leaves the cell out.
pub(crate) fn xlsx_with_sheets(sheets: &[&[&[&str]]]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));

    let mut overrides = String::new();
    let mut sheet_entries = String::new();
    let mut relationships = String::new();
    for index in 1..=sheets.len() {
        overrides.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{index}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
        sheet_entries.push_str(&format!(
            r#"<sheet name="Sheet{index}" sheetId="{index}" r:id="rId{index}"/>"#
        ));
        relationships.push_str(&format!(
            r#"<Relationship Id="rId{index}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{index}.xml"/>"#
        ));
    }

    let parts = [
        (
            "[Content_Types].xml".to_owned(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>{overrides}</Types>"#
            ),
        ),
        (
            "_rels/.rels".to_owned(),
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#.to_owned(),
        ),
        (
            "xl/workbook.xml".to_owned(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>{sheet_entries}</sheets></workbook>"#
            ),
        ),
        (
            "xl/_rels/workbook.xml.rels".to_owned(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{relationships}</Relationships>"#
            ),
        ),
    ];
    for (name, body) in parts {
        writer.start_file(name, stored()).expect("start xlsx part");
        writer.write_all(body.as_bytes()).expect("write xlsx part");
    }

    for (index, rows) in sheets.iter().enumerate() {
        writer
            .start_file(format!("xl/worksheets/sheet{}.xml", index + 1), stored())
            .expect("start worksheet");
        writer
            .write_all(worksheet_xml(rows).as_bytes())
            .expect("write worksheet");
    }

    writer.finish().expect("finish xlsx archive").into_inner()
}

fn stored() -> zip::write::SimpleFileOptions {
    zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored)
}

fn worksheet_xml(rows: &[&[&str]]) -> String {
    let mut data = String::new();
    for (row_index, cells) in rows.iter().enumerate() {
        let row_number = row_index + 1;
        data.push_str(&format!(r#"<row r="{row_number}">"#));
        for (column_index, value) in cells.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let reference = format!("{}{row_number}", column_letter(column_index));
            if let Some(number) = value.strip_prefix("=num:") {
                data.push_str(&format!(r#"<c r="{reference}"><v>{number}</v></c>"#));
            } else {
                data.push_str(&format!(
                    r#"<c r="{reference}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    escape_xml(value)
                ));
            }
        }
        data.push_str("</row>");
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{data}</sheetData></worksheet>"#
    )
}

fn column_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
