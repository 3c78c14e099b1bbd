//! Schools overview page built from info cards.

use leptos::children::ViewFn;
use leptos::prelude::*;

use crate::components::info_card::InfoCard;
use crate::state::school::SchoolInfo;

#[component]
pub fn SchoolsPage() -> impl IntoView {
    let school = SchoolInfo::placeholder();
    let name = school.name.clone();

    view! {
        <div class="schools-page">
            <h1>"Schools"</h1>

            <InfoCard
                title=name
                subtitle=school.head_teacher.clone()
                actions=ViewFn::from(|| {
                    view! { <a class="btn" href="/account">"My Account"</a> }
                })
                class="schools-page__card".to_owned()
            >
                // Served by the dev asset middleware locally, by the asset
                // pipeline in production.
                <img
                    class="schools-page__image"
                    src="/schools/school-image"
                    alt=format!("{} building", school.name)
                />
                <dl class="schools-page__details">
                    <dt>"Address"</dt>
                    <dd>{school.address.clone()}</dd>
                    <dt>"Phone"</dt>
                    <dd>{school.phone.clone()}</dd>
                </dl>
            </InfoCard>

            <InfoCard class="schools-page__card".to_owned()>
                <p>"More schools will appear here as they are registered."</p>
            </InfoCard>
        </div>
    }
}
