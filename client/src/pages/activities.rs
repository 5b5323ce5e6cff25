//! Activities page: list on one side, signup form and banner on the other.

use leptos::prelude::*;

use crate::components::activity_list::ActivityList;
use crate::components::message_banner::MessageBanner;
use crate::components::signup_form::SignupForm;

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList/>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm/>
                <MessageBanner/>
            </section>
        </main>
        <footer>
            <p>"© 2023 Mergington High School"</p>
        </footer>
    }
}
