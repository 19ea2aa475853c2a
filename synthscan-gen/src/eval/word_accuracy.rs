use crate::eval::SequenceMatcher;

/// Lower-cased words of `text`, split on whitespace
pub fn normalize_words(text: &str) -> Vec<String> {
    text.replace('\n', " ")
        .replace("  ", " ")
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Percentage (0-100) of ground truth words recovered by the OCR output, in order.
pub fn word_accuracy(ground_truth: &str, ocr_text: &str) -> f64 {
    let gt_words = normalize_words(ground_truth);
    let ocr_words = normalize_words(ocr_text);

    if gt_words.is_empty() {
        return match ocr_words.is_empty() {
            true => 100.0,
            false => 0.0,
        };
    }

    let correct = SequenceMatcher::new(&gt_words, &ocr_words).n_matched();
    correct as f64 / gt_words.len() as f64 * 100.0
}
