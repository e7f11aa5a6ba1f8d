use dioxus::prelude::*;

mod abi;
mod components;
mod connection;
mod format;
mod query;
mod rpc;
mod switch;
mod units;
mod wallet;

use components::{Navbar, SwitchPanel};
use connection::Connection;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(Connection::new);

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f172a; color: #e2e8f0; font-family: ui-sans-serif, system-ui, sans-serif;",
            Navbar {}
            div { style: "max-width: 960px; margin: 0 auto; padding: 110px 24px 24px;",
                header { style: "text-align: center; margin-bottom: 32px;",
                    p { style: "color: #94a3b8; max-width: 640px; margin: 0 auto;",
                        "Secure your digital assets by setting up a nominee who will receive your funds if you don't sign in within your specified interval."
                    }
                }
                SwitchPanel {}
                footer { style: "margin-top: 48px; padding-top: 24px; border-top: 1px solid #1e293b; text-align: center; color: #64748b; font-size: 13px;",
                    p { "Dead Man's Switch DApp • Running on Sepolia Testnet" }
                }
            }
        }
    }
}
