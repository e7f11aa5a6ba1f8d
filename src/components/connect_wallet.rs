use dioxus::prelude::*;

use crate::connection::Connection;
use crate::format::shorten_address;
use crate::wallet::EthereumWallet;

#[component]
pub fn Navbar() -> Element {
    let connection = use_context::<Connection>();

    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; z-index: 10; padding: 16px 24px; background: rgba(15,23,42,0.85); backdrop-filter: blur(12px); border-bottom: 1px solid #334155; display: flex; align-items: center; justify-content: space-between;",
            h1 {
                style: "font-size: 22px; font-weight: 700; background: linear-gradient(90deg, #a855f7, #3b82f6); -webkit-background-clip: text; color: transparent; margin: 0;",
                "Dead Man's Switch"
            }
            if connection.is_connected() {
                Disconnect {}
            } else {
                Connect {}
            }
        }
    }
}

#[component]
fn Connect() -> Element {
    let connection = use_context::<Connection>();

    let connect = move |_| {
        spawn(async move {
            if !EthereumWallet::is_installed() {
                log::error!("no browser wallet detected");
                return;
            }
            match connection.connect().await {
                Ok(address) => log::info!("wallet connected: {}", address),
                Err(e) => log::error!("wallet connection failed: {}", e),
            }
        });
    };

    rsx! {
        button {
            onclick: connect,
            style: "background: linear-gradient(90deg, #9333ea, #2563eb); padding: 10px 20px; border-radius: 10px; border: none; color: #fff; font-weight: 600; cursor: pointer;",
            "Connect Wallet"
        }
    }
}

#[component]
fn Disconnect() -> Element {
    let connection = use_context::<Connection>();
    let account = connection.account().unwrap_or_default();

    rsx! {
        div { style: "display: flex; align-items: center; gap: 12px;",
            span { style: "color: #94a3b8; font-size: 13px;", "{shorten_address(&account)}" }
            button {
                onclick: move |_| connection.disconnect(),
                style: "background: linear-gradient(90deg, #9333ea, #2563eb); padding: 10px 20px; border-radius: 10px; border: none; color: #fff; font-weight: 600; cursor: pointer;",
                "Disconnect"
            }
        }
    }
}
