use tracing::debug;

use crate::modules::pricing::models::Installment;

/// Pick the installment plan to show the shopper.
///
/// Interest-free plans are preferred; the full list is only considered when
/// none is interest-free. Among the candidates the highest
/// `number_of_installments` wins, and ties keep the earliest entry.
/// Empty or absent input yields `None`.
pub fn select_installment(installments: Option<&[Installment]>) -> Option<&Installment> {
    let installments = installments.filter(|list| !list.is_empty())?;
    let has_interest_free = installments.iter().any(Installment::is_interest_free);

    let selected = installments
        .iter()
        .filter(|installment| !has_interest_free || installment.is_interest_free())
        .fold(None, |best: Option<&Installment>, current| match best {
            Some(best) if best.number_of_installments >= current.number_of_installments => {
                Some(best)
            }
            _ => Some(current),
        });

    if let Some(installment) = selected {
        debug!(
            "Selected {}x installment (interest free: {}) out of {} plans",
            installment.number_of_installments,
            installment.is_interest_free(),
            installments.len()
        );
    }

    selected
}
