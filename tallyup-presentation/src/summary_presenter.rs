use crate::money_format::DisplayOptions;
use tallyup_domain::Transfer;
use tallyup_i18n as i18n;

pub struct SummaryPresenter;

impl SummaryPresenter {
    /// Plain-text summary meant to be pasted into a group chat.
    ///
    /// Empty when there is nothing to pay.
    pub fn share_text(transfers: &[Transfer], options: &DisplayOptions) -> String {
        if transfers.is_empty() {
            return String::new();
        }

        let mut lines = Vec::with_capacity(transfers.len() + 4);
        lines.push(i18n::SHARE_TITLE.to_owned());
        lines.push(String::new());
        lines.extend(transfers.iter().map(|transfer| {
            let amount = options.format(transfer.amount);
            i18n::transfer_line(&transfer.from, &transfer.to, &amount).to_string()
        }));
        lines.push(String::new());
        lines.push(i18n::transfer_count(transfers.len()).to_string());
        lines.join("\n")
    }
}
