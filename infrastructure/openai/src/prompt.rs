use business::domain::extraction::model::ReceiptExtraction;

/// Appends each receipt as a numbered JSON block, starting at 1.
pub(crate) fn append_receipts(prompt: &mut String, receipts: &[ReceiptExtraction]) {
    for (index, receipt) in receipts.iter().enumerate() {
        let json = serde_json::to_string(receipt).unwrap_or_default();
        prompt.push_str(&format!("\n\nReceipt {}: {}", index + 1, json));
    }
}
