use super::*;
use futures::channel::oneshot;
use futures::executor::block_on;

fn file(media_type: &str, bytes: &[u8]) -> IncomingFile {
    IncomingFile { name: "f".to_owned(), media_type: media_type.to_owned(), bytes: bytes.to_vec() }
}

/// A file whose decode finishes only when the test says so.
struct GatedFile {
    media_type: &'static str,
    rx: oneshot::Receiver<String>,
}

impl ImageSource for GatedFile {
    fn media_type(&self) -> String {
        self.media_type.to_owned()
    }

    fn name(&self) -> String {
        "gated".to_owned()
    }
}

// =============================================================
// ImageSet
// =============================================================

#[test]
fn image_set_remove_shifts_later_items_down() {
    let mut set: ImageSet = ["a", "b", "c", "d"].into_iter().map(str::to_owned).collect();
    assert_eq!(set.remove(1).as_deref(), Some("b"));
    assert_eq!(set.as_slice(), ["a", "c", "d"]);
    assert_eq!(set.len(), 3);
}

#[test]
fn image_set_remove_out_of_range_is_noop() {
    let mut set: ImageSet = ["a"].into_iter().map(str::to_owned).collect();
    assert_eq!(set.remove(1), None);
    assert_eq!(set.len(), 1);
}

#[test]
fn image_set_minimum_is_two() {
    let mut set = ImageSet::new();
    assert!(!set.meets_minimum());
    set.push("a".to_owned());
    assert!(!set.meets_minimum());
    set.push("b".to_owned());
    assert!(set.meets_minimum());
}

// =============================================================
// DragState
// =============================================================

#[test]
fn drag_state_follows_enter_over_leave_drop() {
    let state = DragState::default();
    assert!(!state.is_active());
    let state = state.after(DragEventKind::Enter);
    assert!(state.is_active());
    assert_eq!(state.after(DragEventKind::Over), DragState::Active);
    assert_eq!(state.after(DragEventKind::Leave), DragState::Inactive);
    assert_eq!(state.after(DragEventKind::Drop), DragState::Inactive);
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn media_type_filter_requires_image_prefix() {
    assert!(is_image_media_type("image/png"));
    assert!(is_image_media_type("image/webp"));
    assert!(!is_image_media_type("application/pdf"));
    assert!(!is_image_media_type(""));
    assert!(!is_image_media_type("text/image/png"));
}

#[test]
fn encode_data_uri_uses_base64_payload() {
    assert_eq!(encode_data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");
}

#[test]
fn decode_drops_non_image_files() {
    let batch = vec![file("image/png", b"a"), file("application/pdf", b"b"), file("image/jpeg", b"c")];
    let decoded: Vec<DecodedImage> = block_on(decode_unordered(batch, decode_incoming).collect());
    assert_eq!(decoded.len(), 2);
    let mut hints: Vec<usize> = decoded.iter().map(|d| d.index_hint).collect();
    hints.sort_unstable();
    assert_eq!(hints, vec![0, 1]);
}

#[test]
fn decode_yields_in_completion_order() {
    let (tx_first, rx_first) = oneshot::channel();
    let (tx_second, rx_second) = oneshot::channel();
    let batch = vec![
        GatedFile { media_type: "image/png", rx: rx_first },
        GatedFile { media_type: "image/png", rx: rx_second },
    ];
    let mut stream = Box::pin(decode_unordered(batch, |f: GatedFile| async move { f.rx.await.ok() }));

    tx_second.send("second".to_owned()).unwrap();
    let early = block_on(stream.next()).unwrap();
    assert_eq!(early, DecodedImage { index_hint: 1, data_uri: "second".to_owned() });

    tx_first.send("first".to_owned()).unwrap();
    let late = block_on(stream.next()).unwrap();
    assert_eq!(late, DecodedImage { index_hint: 0, data_uri: "first".to_owned() });

    assert!(block_on(stream.next()).is_none());
}

#[test]
fn decode_skips_failed_reads() {
    let (tx_ok, rx_ok) = oneshot::channel();
    let (tx_dropped, rx_dropped) = oneshot::channel::<String>();
    let batch = vec![
        GatedFile { media_type: "image/png", rx: rx_ok },
        GatedFile { media_type: "image/gif", rx: rx_dropped },
    ];
    tx_ok.send("ok".to_owned()).unwrap();
    drop(tx_dropped);
    let decoded: Vec<DecodedImage> =
        block_on(decode_unordered(batch, |f: GatedFile| async move { f.rx.await.ok() }).collect());
    assert_eq!(decoded, vec![DecodedImage { index_hint: 0, data_uri: "ok".to_owned() }]);
}

#[test]
fn incoming_file_exposes_name_for_intake_logs() {
    let file = IncomingFile { name: "receipt.pdf".to_owned(), media_type: "application/pdf".to_owned(), bytes: vec![] };
    assert_eq!(ImageSource::name(&file), "receipt.pdf");
    assert!(!is_image_media_type(&file.media_type()));
}
