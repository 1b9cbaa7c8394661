use leptos::prelude::*;

use super::{Icon, ICON_USER};
use crate::content::{TeamMember, STORY, STORY_QUOTE, TEAM, TEAM_BLURB};

#[component]
pub fn AboutPanel() -> impl IntoView {
    view! {
        <section class="panel panel-about" data-panel="about">
            <div class="container">
                <div class="section-header centered">
                    <h2 class="section-eyebrow">"About Us"</h2>
                    <p class="section-title">"Our Story"</p>
                    <p class="section-description">
                        "We're a team of designers and developers passionate about creating beautiful, functional websites."
                    </p>
                </div>

                <div class="prose">
                    {STORY.iter().map(|para| view! { <p>{*para}</p> }).collect_view()}
                    <blockquote>{STORY_QUOTE}</blockquote>
                    <h3>"Our Team"</h3>
                    <p>{TEAM_BLURB}</p>
                </div>

                <div class="team-grid">
                    {TEAM.iter().map(|member| view! { <TeamCard member=*member /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TeamCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class="team-card">
            <div class="team-card-head">
                <span class="avatar avatar-lg">
                    <Icon path=ICON_USER size="24" />
                </span>
                <div>
                    <h3 class="team-name">{member.name}</h3>
                    <p class="team-role">{member.title}</p>
                </div>
            </div>
            <p class="team-bio">{member.bio}</p>
        </div>
    }
}
