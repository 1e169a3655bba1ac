//! Terminal overlay opened by "> INFILTRATE SYSTEM"
//!
//! Prints a boot log line by line. Closes via the `[X]` button or Escape.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;

const BOOT_LINES: &[&str] = &[
    "> establishing uplink to elicit.mainframe ...",
    "> bypassing firewall [##########] 100%",
    "> decrypting schedule manifest ... OK",
    "> speakers.db mounted (read-only)",
    "> sponsors.db mounted (read-only)",
    "> WARNING: corruption level critical",
    "> access granted. welcome, operator.",
];

const LINE_INTERVAL_MS: u64 = 350;

#[component]
pub fn TerminalInterface(on_close: Callback<()>) -> impl IntoView {
    let shown = RwSignal::new(0usize);

    match set_interval_with_handle(
        move || {
            shown.update(|n| {
                if *n < BOOT_LINES.len() {
                    *n += 1;
                }
            })
        },
        Duration::from_millis(LINE_INTERVAL_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => {
            log::warn!("Terminal boot log interval not started: {:?}", e);
            shown.set(BOOT_LINES.len());
        }
    }

    let keys = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keys.remove());

    view! {
        <div class="terminal-overlay" role="dialog" aria-label="Terminal">
            <div class="terminal-window">
                <div class="terminal-header">
                    <div class="terminal-dot red"></div>
                    <div class="terminal-dot yellow"></div>
                    <div class="terminal-dot green"></div>
                    <span class="terminal-title">"root@elicit:~"</span>
                    <button
                        class="terminal-close"
                        aria-label="Close terminal"
                        on:click=move |_| on_close.run(())
                    >
                        "[X]"
                    </button>
                </div>
                <div class="terminal-body">
                    {move || {
                        BOOT_LINES
                            .iter()
                            .take(shown.get())
                            .map(|line| view! { <div class="terminal-output">{*line}</div> })
                            .collect_view()
                    }}
                    <div class="terminal-line">
                        <span class="terminal-prompt">"$"</span>
                        <span class="terminal-cursor">"_"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
