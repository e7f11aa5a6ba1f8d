use dioxus::prelude::*;

use crate::connection::Connection;
use crate::format::{format_interval, format_last_sign_in, format_nominee};
use crate::query::Query;
use crate::switch::{self, StakeRecord};
use crate::units::{format_ether, parse_ether};

const CARD: &str = "background: #1e293b; border: 1px solid #334155; border-radius: 12px; padding: 24px;";
const CELL: &str = "background: #0f172a; border: 1px solid #334155; border-radius: 10px; padding: 16px;";
const LABEL: &str = "color: #94a3b8; font-size: 13px; margin: 0 0 4px 0;";
const INPUT: &str = "width: 100%; box-sizing: border-box; padding: 10px 12px; background: #0f172a; border: 1px solid #475569; border-radius: 8px; color: #e2e8f0;";
const STATUS: &str = "color: #94a3b8; font-size: 13px; margin: 12px 0 0 0;";

/// Gate + parse for the stake form. `None` means a field is still
/// empty and nothing must dispatch; `Some(Err)` is a user-visible
/// input problem.
fn stake_inputs(amount: &str, nominee: &str, interval: &str) -> Option<Result<(u128, u64), String>> {
    if amount.trim().is_empty() || nominee.trim().is_empty() || interval.trim().is_empty() {
        return None;
    }
    Some(
        parse_ether(amount)
            .map_err(|e| format!("Stake amount: {}", e))
            .and_then(|wei| parse_interval(interval).map(|secs| (wei, secs))),
    )
}

fn unstake_inputs(amount: &str) -> Option<Result<u128, String>> {
    if amount.trim().is_empty() {
        return None;
    }
    Some(parse_ether(amount).map_err(|e| format!("Unstake amount: {}", e)))
}

fn interval_input(interval: &str) -> Option<Result<u64, String>> {
    if interval.trim().is_empty() {
        return None;
    }
    Some(parse_interval(interval))
}

fn parse_interval(value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| "Sign interval must be a whole number of seconds".to_string())
}

#[component]
pub fn SwitchPanel() -> Element {
    let connection = use_context::<Connection>();

    let mut stake_amount = use_signal(String::new);
    let mut nominee_address = use_signal(String::new);
    let mut sign_interval = use_signal(String::new);
    let mut unstake_amount = use_signal(String::new);

    let mut stake_record = use_signal(|| Query::<StakeRecord>::Pending);
    let mut total_stake = use_signal(|| Query::<u128>::Pending);
    let mut stake_status = use_signal(|| Option::<String>::None);
    let mut unstake_status = use_signal(|| Option::<String>::None);
    let mut actions_status = use_signal(|| Option::<String>::None);

    // Re-issue both reads whenever the connected account changes.
    use_effect(move || {
        let account = connection.account();
        stake_record.set(Query::Pending);
        total_stake.set(Query::Pending);
        let Some(account) = account else { return };
        spawn(async move {
            match switch::fetch_stake_record(&account).await {
                Ok(record) => stake_record.set(Query::Ready(record)),
                Err(e) => {
                    log::error!("stakes({}) read failed: {}", account, e);
                    stake_record.set(Query::Failed(e.to_string()));
                }
            }
            match switch::fetch_total_stake().await {
                Ok(total) => total_stake.set(Query::Ready(total)),
                Err(e) => {
                    log::error!("totalStake read failed: {}", e);
                    total_stake.set(Query::Failed(e.to_string()));
                }
            }
        });
    });

    // Refetch after a submitted write, once the next block had a
    // chance to include it.
    let refresh = move || {
        let Some(account) = connection.account() else {
            return;
        };
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(12)).await;
            if let Ok(record) = switch::fetch_stake_record(&account).await {
                stake_record.set(Query::Ready(record));
            }
            if let Ok(total) = switch::fetch_total_stake().await {
                total_stake.set(Query::Ready(total));
            }
        });
    };

    let handle_stake = move |_| {
        let amount = stake_amount.read().clone();
        let nominee = nominee_address.read().trim().to_string();
        let interval = sign_interval.read().clone();
        spawn(async move {
            let (amount_wei, interval_secs) = match stake_inputs(&amount, &nominee, &interval) {
                None => return,
                Some(Err(msg)) => {
                    stake_status.set(Some(msg));
                    return;
                }
                Some(Ok(parsed)) => parsed,
            };
            let Some(from) = connection.account() else {
                return;
            };
            match switch::stake(&from, &nominee, interval_secs, amount_wei).await {
                Ok(tx_hash) => {
                    stake_amount.set(String::new());
                    nominee_address.set(String::new());
                    sign_interval.set(String::new());
                    stake_status.set(Some(format!("Stake submitted: {}", tx_hash)));
                    refresh();
                }
                Err(e) => {
                    log::error!("stake failed: {}", e);
                    stake_status.set(Some(format!("Stake failed: {}", e)));
                }
            }
        });
    };

    let handle_unstake = move |_| {
        let amount = unstake_amount.read().clone();
        spawn(async move {
            let amount_wei = match unstake_inputs(&amount) {
                None => return,
                Some(Err(msg)) => {
                    unstake_status.set(Some(msg));
                    return;
                }
                Some(Ok(wei)) => wei,
            };
            let Some(from) = connection.account() else {
                return;
            };
            match switch::unstake(&from, amount_wei).await {
                Ok(tx_hash) => {
                    unstake_amount.set(String::new());
                    unstake_status.set(Some(format!("Unstake submitted: {}", tx_hash)));
                    refresh();
                }
                Err(e) => {
                    log::error!("unstake failed: {}", e);
                    unstake_status.set(Some(format!("Unstake failed: {}", e)));
                }
            }
        });
    };

    let handle_sign_in = move |_| {
        spawn(async move {
            let Some(from) = connection.account() else {
                return;
            };
            match switch::sign_in(&from).await {
                Ok(tx_hash) => {
                    actions_status.set(Some(format!("Signed in: {}", tx_hash)));
                    refresh();
                }
                Err(e) => {
                    log::error!("sign-in failed: {}", e);
                    actions_status.set(Some(format!("Sign in failed: {}", e)));
                }
            }
        });
    };

    let handle_update_nominee = move |_| {
        let nominee = nominee_address.read().trim().to_string();
        spawn(async move {
            if nominee.is_empty() {
                return;
            }
            let Some(from) = connection.account() else {
                return;
            };
            match switch::update_nominee(&from, &nominee).await {
                Ok(tx_hash) => {
                    nominee_address.set(String::new());
                    actions_status.set(Some(format!("Nominee update submitted: {}", tx_hash)));
                    refresh();
                }
                Err(e) => {
                    log::error!("nominee update failed: {}", e);
                    actions_status.set(Some(format!("Nominee update failed: {}", e)));
                }
            }
        });
    };

    let handle_update_interval = move |_| {
        let interval = sign_interval.read().clone();
        spawn(async move {
            let interval_secs = match interval_input(&interval) {
                None => return,
                Some(Err(msg)) => {
                    actions_status.set(Some(msg));
                    return;
                }
                Some(Ok(secs)) => secs,
            };
            let Some(from) = connection.account() else {
                return;
            };
            match switch::update_sign_interval(&from, interval_secs).await {
                Ok(tx_hash) => {
                    sign_interval.set(String::new());
                    actions_status.set(Some(format!("Interval update submitted: {}", tx_hash)));
                    refresh();
                }
                Err(e) => {
                    log::error!("interval update failed: {}", e);
                    actions_status.set(Some(format!("Interval update failed: {}", e)));
                }
            }
        });
    };

    if !connection.is_connected() {
        return rsx! {
            div { style: CARD,
                p { style: "text-align: center; color: #94a3b8; margin: 0;",
                    "Please connect your wallet to interact with the contract"
                }
            }
        };
    }

    let summary = match stake_record.read().clone() {
        Query::Pending => rsx! {
            div { style: CELL,
                p { style: "text-align: center; color: #94a3b8; margin: 0;", "Loading stake information..." }
            }
        },
        Query::Failed(err) => rsx! {
            div { style: CELL,
                p { style: "text-align: center; color: #fca5a5; margin: 0;", "Could not load stake information: {err}" }
            }
        },
        Query::Ready(record) => rsx! {
            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                div { style: CELL,
                    p { style: LABEL, "Your Balance" }
                    p { style: "color: #4ade80; font-size: 22px; font-weight: 600; margin: 0;",
                        "{format_ether(record.balance_wei)} ETH"
                    }
                }
                div { style: CELL,
                    p { style: LABEL, "Last Sign In" }
                    p { style: "color: #facc15; font-weight: 500; margin: 0;",
                        "{format_last_sign_in(record.last_sign_in)}"
                    }
                }
                div { style: CELL,
                    p { style: LABEL, "Nominee" }
                    p { style: "color: #c084fc; font-weight: 500; margin: 0; overflow: hidden; text-overflow: ellipsis;",
                        "{format_nominee(&record.nominee)}"
                    }
                }
                div { style: CELL,
                    p { style: LABEL, "Sign Interval" }
                    p { style: "color: #22d3ee; font-weight: 500; margin: 0;",
                        "{format_interval(record.sign_interval)}"
                    }
                }
            }
        },
    };

    let total_query = total_stake.read().clone();
    let total = if total_query.is_pending() {
        "Loading...".to_string()
    } else if let Query::Failed(err) = &total_query {
        format!("Unavailable: {}", err)
    } else {
        total_query
            .as_ready()
            .map(|total| format!("{} ETH", format_ether(*total)))
            .unwrap_or_default()
    };

    rsx! {
        div { style: "display: grid; gap: 24px;",

            // Account summary
            div { style: CARD,
                h2 { style: "color: #60a5fa; font-size: 18px; margin: 0 0 16px 0; border-bottom: 1px solid #334155; padding-bottom: 8px;",
                    "Your Stake Information"
                }
                {summary}
                div { style: "margin-top: 16px; padding-top: 12px; border-top: 1px solid #334155;",
                    p { style: LABEL, "Total Contract Stake" }
                    p { style: "color: #4ade80; font-size: 18px; font-weight: 600; margin: 0;", "{total}" }
                }
            }

            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 24px;",
                // Stake form
                div { style: CARD,
                    h2 { style: "color: #4ade80; font-size: 18px; margin: 0 0 16px 0; border-bottom: 1px solid #334155; padding-bottom: 8px;",
                        "Stake ETH"
                    }
                    div { style: "display: grid; gap: 12px;",
                        div {
                            label { style: LABEL, "Amount (ETH)" }
                            input {
                                r#type: "text",
                                value: "{stake_amount}",
                                oninput: move |e| stake_amount.set(e.value()),
                                placeholder: "0.1",
                                style: INPUT,
                            }
                        }
                        div {
                            label { style: LABEL, "Nominee Address" }
                            input {
                                r#type: "text",
                                value: "{nominee_address}",
                                oninput: move |e| nominee_address.set(e.value()),
                                placeholder: "0x...",
                                style: INPUT,
                            }
                        }
                        div {
                            label { style: LABEL, "Sign Interval (seconds)" }
                            input {
                                r#type: "number",
                                value: "{sign_interval}",
                                oninput: move |e| sign_interval.set(e.value()),
                                placeholder: "2592000 (30 days)",
                                style: INPUT,
                            }
                            p { style: "color: #64748b; font-size: 11px; margin: 4px 0 0 0;",
                                "Common intervals: 86400 (1 day), 604800 (1 week), 2592000 (30 days)"
                            }
                        }
                        button {
                            onclick: handle_stake,
                            style: "padding: 12px; border-radius: 8px; background: #16a34a; color: #fff; border: none; font-weight: 600; cursor: pointer;",
                            "Stake ETH"
                        }
                        if let Some(msg) = stake_status.read().as_ref() {
                            p { style: STATUS, "{msg}" }
                        }
                    }
                }

                // Unstake form
                div { style: CARD,
                    h2 { style: "color: #f87171; font-size: 18px; margin: 0 0 16px 0; border-bottom: 1px solid #334155; padding-bottom: 8px;",
                        "Unstake ETH"
                    }
                    div { style: "display: grid; gap: 12px;",
                        div {
                            label { style: LABEL, "Amount (ETH)" }
                            input {
                                r#type: "text",
                                value: "{unstake_amount}",
                                oninput: move |e| unstake_amount.set(e.value()),
                                placeholder: "0.1",
                                style: INPUT,
                            }
                        }
                        button {
                            onclick: handle_unstake,
                            style: "padding: 12px; border-radius: 8px; background: #dc2626; color: #fff; border: none; font-weight: 600; cursor: pointer;",
                            "Unstake ETH"
                        }
                        if let Some(msg) = unstake_status.read().as_ref() {
                            p { style: STATUS, "{msg}" }
                        }
                    }
                }
            }

            // Actions & settings
            div { style: CARD,
                h2 { style: "color: #60a5fa; font-size: 18px; margin: 0 0 16px 0; border-bottom: 1px solid #334155; padding-bottom: 8px;",
                    "Actions & Settings"
                }
                div { style: "display: grid; gap: 16px;",
                    div { style: CELL,
                        h3 { style: "color: #60a5fa; font-size: 15px; margin: 0 0 8px 0;", "Sign In" }
                        p { style: "color: #94a3b8; font-size: 13px; margin: 0 0 12px 0;",
                            "Sign in to reset your timer and prevent funds from being transferred to your nominee."
                        }
                        button {
                            onclick: handle_sign_in,
                            style: "width: 100%; padding: 12px; border-radius: 8px; background: #2563eb; color: #fff; border: none; font-weight: 600; cursor: pointer;",
                            "Sign In"
                        }
                    }
                    div { style: CELL,
                        h3 { style: "color: #c084fc; font-size: 15px; margin: 0 0 12px 0;", "Update Settings" }
                        div { style: "margin-bottom: 16px;",
                            label { style: LABEL, "New Nominee Address" }
                            div { style: "display: flex; gap: 8px;",
                                input {
                                    r#type: "text",
                                    value: "{nominee_address}",
                                    oninput: move |e| nominee_address.set(e.value()),
                                    placeholder: "0x...",
                                    style: INPUT,
                                }
                                button {
                                    onclick: handle_update_nominee,
                                    style: "padding: 10px 18px; border-radius: 8px; background: #9333ea; color: #fff; border: none; font-weight: 600; cursor: pointer;",
                                    "Update"
                                }
                            }
                        }
                        div {
                            label { style: LABEL, "New Sign Interval (seconds)" }
                            div { style: "display: flex; gap: 8px;",
                                input {
                                    r#type: "number",
                                    value: "{sign_interval}",
                                    oninput: move |e| sign_interval.set(e.value()),
                                    placeholder: "2592000 (30 days)",
                                    style: INPUT,
                                }
                                button {
                                    onclick: handle_update_interval,
                                    style: "padding: 10px 18px; border-radius: 8px; background: #9333ea; color: #fff; border: none; font-weight: 600; cursor: pointer;",
                                    "Update"
                                }
                            }
                            p { style: "color: #64748b; font-size: 11px; margin: 4px 0 0 0;",
                                "Common intervals: 86400 (1 day), 604800 (1 week), 2592000 (30 days)"
                            }
                        }
                        if let Some(msg) = actions_status.read().as_ref() {
                            p { style: STATUS, "{msg}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOMINEE: &str = "0x9bd27c3a181c3b27b0574279fd3e5e20b29b2cbb";

    #[test]
    fn empty_fields_block_dispatch() {
        assert_eq!(stake_inputs("", NOMINEE, "60"), None);
        assert_eq!(stake_inputs("1", "", "60"), None);
        assert_eq!(stake_inputs("1", NOMINEE, ""), None);
        assert_eq!(stake_inputs("  ", NOMINEE, "60"), None);
        assert_eq!(unstake_inputs(""), None);
        assert_eq!(unstake_inputs("   "), None);
        assert_eq!(interval_input(" "), None);
    }

    #[test]
    fn complete_fields_parse() {
        assert_eq!(
            stake_inputs("0.5", NOMINEE, "86400"),
            Some(Ok((500_000_000_000_000_000, 86_400)))
        );
        assert_eq!(unstake_inputs("1"), Some(Ok(1_000_000_000_000_000_000)));
        assert_eq!(interval_input("2592000"), Some(Ok(2_592_000)));
    }

    #[test]
    fn malformed_values_surface_an_error() {
        // a lone dot is not an amount, so it must not reach the wallet
        assert!(matches!(stake_inputs(".", NOMINEE, "60"), Some(Err(_))));
        assert!(matches!(stake_inputs("+1", NOMINEE, "60"), Some(Err(_))));
        assert!(matches!(stake_inputs("1", NOMINEE, "1.5"), Some(Err(_))));
        assert!(matches!(unstake_inputs("abc"), Some(Err(_))));
        assert!(matches!(interval_input("-5"), Some(Err(_))));
    }
}
