//! In-memory document attachments for the organization verification step.
//!
//! Drag-and-drop and the file picker both land in [`AttachmentList::add_files`];
//! the list exclusively owns each file's bytes until removal or submit.

/// A file as delivered by either input path, before an id is assigned.
#[derive(Clone, Debug)]
pub struct NewAttachment {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// An accepted file with its wizard-unique id.
#[derive(Clone, Debug)]
pub struct UploadedFile {
    pub id: u64,
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Ordered collection of uploaded documents. Insertion order is preserved
/// and duplicate names are allowed; only ids are unique.
#[derive(Clone, Default, Debug)]
pub struct AttachmentList {
    next_id: u64,
    files: Vec<UploadedFile>,
}

impl AttachmentList {
    pub fn add_files(&mut self, inputs: Vec<NewAttachment>) {
        for input in inputs {
            let id = self.next_id;
            self.next_id += 1;
            self.files.push(UploadedFile {
                id,
                name: input.name,
                size: input.size,
                mime: input.mime,
                bytes: input.bytes,
            });
        }
    }

    /// Removes the entry with the given id. No-op if absent.
    pub fn remove(&mut self, id: u64) {
        self.files.retain(|file| file.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &UploadedFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Exact display formatting for byte counts: whole bytes below 1 KiB,
/// one-decimal KB below 1 MiB, one-decimal MB above.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} bytes", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Broad MIME classes used to pick a file icon.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FileKind {
    Pdf,
    Image,
    Document,
    Spreadsheet,
    Other,
}

impl FileKind {
    pub fn from_mime(mime: &str) -> Self {
        if mime.contains("pdf") {
            FileKind::Pdf
        } else if mime.contains("image") {
            FileKind::Image
        } else if mime.contains("excel") || mime.contains("sheet") {
            FileKind::Spreadsheet
        } else if mime.contains("word") || mime.contains("document") {
            FileKind::Document
        } else {
            FileKind::Other
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            FileKind::Pdf => "file-icon pdf",
            FileKind::Image => "file-icon image",
            FileKind::Document => "file-icon document",
            FileKind::Spreadsheet => "file-icon spreadsheet",
            FileKind::Other => "file-icon other",
        }
    }
}

/// Best-effort MIME type from the filename extension; the browser file
/// engine hands us names and bytes but not types.
pub fn mime_from_name(name: &str) -> String {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    let mime = match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    };
    mime.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(name: &str, size: u64) -> NewAttachment {
        NewAttachment {
            name: name.to_string(),
            size,
            mime: mime_from_name(name),
            bytes: Vec::new(),
        }
    }

    #[test]
    fn add_files_assigns_fresh_ids_and_keeps_order() {
        let mut list = AttachmentList::default();
        list.add_files(vec![attachment("a.pdf", 500), attachment("b.png", 2_000_000)]);
        list.add_files(vec![attachment("a.pdf", 500)]); // duplicate name allowed

        let entries: Vec<_> = list.iter().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "a.pdf");
        assert_eq!(entries[1].name, "b.png");
        assert_eq!(entries[2].name, "a.pdf");

        let mut ids: Vec<_> = list.iter().map(|f| f.id).collect();
        let unsorted = ids.clone();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert_eq!(unsorted, ids); // insertion order is also id order
    }

    #[test]
    fn sizes_format_for_display() {
        let mut list = AttachmentList::default();
        list.add_files(vec![attachment("a.pdf", 500), attachment("b.png", 2_000_000)]);
        let formatted: Vec<_> = list.iter().map(|f| format_file_size(f.size)).collect();
        assert_eq!(formatted, vec!["500 bytes", "1.9 MB"]);
    }

    #[test]
    fn size_formatting_boundaries() {
        assert_eq!(format_file_size(0), "0 bytes");
        assert_eq!(format_file_size(1023), "1023 bytes");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_575), "1024.0 KB");
        assert_eq!(format_file_size(1_048_576), "1.0 MB");
        assert_eq!(format_file_size(5_767_168), "5.5 MB");
    }

    #[test]
    fn remove_deletes_exactly_one_and_ignores_unknown_ids() {
        let mut list = AttachmentList::default();
        list.add_files(vec![attachment("a.pdf", 10), attachment("b.pdf", 20)]);
        let first_id = list.iter().next().map(|f| f.id).unwrap();

        list.remove(first_id);
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().map(|f| f.name.as_str()), Some("b.pdf"));

        list.remove(9999);
        assert_eq!(list.len(), 1);

        // Ids never repeat, even after removals.
        list.add_files(vec![attachment("c.pdf", 30)]);
        assert!(list.iter().all(|f| f.id != first_id));
    }

    #[test]
    fn mime_inference_and_icon_classes() {
        assert_eq!(mime_from_name("report.PDF"), "application/pdf");
        assert_eq!(mime_from_name("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_from_name("no-extension"), "application/octet-stream");

        assert_eq!(FileKind::from_mime("application/pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_mime("image/png"), FileKind::Image);
        assert_eq!(
            FileKind::from_mime(&mime_from_name("ledger.xlsx")),
            FileKind::Spreadsheet
        );
        assert_eq!(
            FileKind::from_mime(&mime_from_name("statute.docx")),
            FileKind::Document
        );
        assert_eq!(FileKind::from_mime("text/plain"), FileKind::Other);
    }
}
