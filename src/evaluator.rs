//! MPIN strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::dates::Demographics;
use crate::normalize::{InvalidInput, normalize};
use crate::scorer;
use crate::sections::{
    Section, common_pin_section, demographic_section, keypad_section, sequence_section,
};
use crate::types::PinEvaluation;

/// Sections in execution order. Findings keep this order.
const SECTIONS: [(&str, Section); 4] = [
    ("common", common_pin_section),
    ("keypad", keypad_section),
    ("sequence", sequence_section),
    ("demographic", demographic_section),
];

/// Delay before an async evaluation starts, so that keystrokes arriving in
/// quick succession cancel the stale request.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates MPIN strength and returns a detailed evaluation.
///
/// # Arguments
/// * `pin` - The raw PIN text
/// * `dates` - Personal dates to match the PIN against, possibly empty
///
/// # Errors
/// Returns [`InvalidInput`] when the text is not a 4 or 6 digit PIN. No
/// partial scoring is attempted in that case.
pub fn evaluate_pin_strength(
    pin: &SecretString,
    dates: &Demographics,
) -> Result<PinEvaluation, InvalidInput> {
    let pin = match normalize(pin) {
        Ok(pin) => pin,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("MPIN rejected before evaluation: {}", err);
            return Err(err);
        }
    };

    let mut findings = Vec::new();
    for (_section_name, section_fn) in SECTIONS {
        let section_findings = section_fn(&pin, dates);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            "Section {} reported {} finding(s)",
            _section_name,
            section_findings.len()
        );

        findings.extend(section_findings);
    }

    let score = scorer::score(&findings);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Evaluated {}-digit MPIN: score {} ({}), {} finding(s)",
        pin.expose().len(),
        score,
        score.strength(),
        findings.len()
    );

    Ok(PinEvaluation { score, findings })
}

/// Async version that sends the evaluation result via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled before or during the
/// wait, nothing is evaluated or sent.
#[cfg(feature = "async")]
pub async fn evaluate_pin_strength_tx(
    pin: &SecretString,
    dates: &Demographics,
    token: CancellationToken,
    tx: mpsc::Sender<Result<PinEvaluation, InvalidInput>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("MPIN evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_pin_strength(pin, dates);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send MPIN evaluation result: {}", _e);
    }
}
