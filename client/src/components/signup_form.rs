//! `#signup-form`: student email plus activity select.
//!
//! Field values live in `BoardState::draft` so the signup flow can reset them
//! on success and leave them alone on failure. No client-side validation
//! beyond the browser's own `required` / `type="email"` handling.

use leptos::prelude::*;

use board::flow;
use board::state::{BoardState, SELECT_PLACEHOLDER};

use crate::state::board_env::BrowserEnv;

#[component]
pub fn SignupForm() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let env = expect_context::<BrowserEnv>();

    let email = Memo::new(move |_| board.with(|s| s.draft.email.clone()));
    let selected = Memo::new(move |_| board.with(|s| s.draft.activity.clone()));
    let options = Memo::new(move |_| board.with(BoardState::select_options));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = board.with_untracked(|s| s.draft.clone());
        env.spawn(move |env| async move {
            flow::signup(&env, &draft.email, &draft.activity).await;
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        board.update(|s| s.draft.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Activity:"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        board.update(|s| s.draft.activity = value);
                    }
                >
                    <option value="" prop:selected=move || selected.get().is_empty()>
                        {SELECT_PLACEHOLDER}
                    </option>
                    <For
                        each=move || options.get()
                        key=|name| name.clone()
                        children=move |name: String| {
                            let value = name.clone();
                            let label = name.clone();
                            view! {
                                <option value=value prop:selected=move || selected.get() == name>
                                    {label}
                                </option>
                            }
                        }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
