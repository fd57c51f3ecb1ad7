use yew::prelude::*;
use web_sys::Element;

use crate::components::button::{Button, Glow, Variant};
use crate::components::icons::{MessageCircleIcon, StarIcon, UsersIcon};
use crate::components::reveal::{RevealState, ScrollReveal, ANIMATE_CLASS};

/// One crew member shown in the community grid.
#[derive(Debug, PartialEq)]
pub struct ProfileRecord {
    pub name: &'static str,
    pub role: &'static str,
    pub image_url: &'static str,
    pub quote: &'static str,
    /// Transition start offset in milliseconds.
    pub reveal_delay: u32,
}

pub const CREW: [ProfileRecord; 4] = [
    ProfileRecord {
        name: "Zorb Nebulax",
        role: "Mission Commander",
        image_url: "https://images.pexels.com/photos/1236701/pexels-photo-1236701.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        quote: "Our mission to extract Etherion is critical for the survival of Smoketron. Join us, Earthlings.",
        reveal_delay: 100,
    },
    ProfileRecord {
        name: "Lyra Quasarix",
        role: "Chief Science Officer",
        image_url: "https://images.pexels.com/photos/761115/pexels-photo-761115.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        quote: "The symbiotic relationship between our civilizations will usher in a new era of interstellar cooperation.",
        reveal_delay: 200,
    },
    ProfileRecord {
        name: "Kryp Stellaron",
        role: "Blockchain Engineer",
        image_url: "https://images.pexels.com/photos/2589653/pexels-photo-2589653.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        quote: "Earth's blockchain technology is primitive but effective. We've enhanced it with Smoketronian quantum algorithms.",
        reveal_delay: 300,
    },
    ProfileRecord {
        name: "Vex Astralite",
        role: "Ambassador to Earth",
        image_url: "https://images.pexels.com/photos/3283568/pexels-photo-3283568.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        quote: "Greetings, humans. Your participation in our protocol will be rewarded generously.",
        reveal_delay: 400,
    },
];

// The CTA block trails the last card's stagger.
const CTA_REVEAL_DELAY_MS: u32 = 500;

fn transition_delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", delay_ms)
}

fn avatar_style(image_url: &str) -> String {
    format!(
        "background-image: url('{}'); filter: hue-rotate(-30deg) brightness(0.9);",
        image_url
    )
}

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub name: String,
    pub role: String,
    pub image_url: String,
    pub quote: String,
    pub reveal_delay: u32,
}

#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    html! {
        <div
            class={classes!("profile-card", ANIMATE_CLASS, RevealState::Hidden.class())}
            style={transition_delay_style(props.reveal_delay)}
        >
            <div class="profile-card-header">
                <div class="profile-avatar">
                    <div class="profile-avatar-image" style={avatar_style(&props.image_url)}></div>
                </div>
                <div>
                    <h3 class="profile-name">{&props.name}</h3>
                    <p class="profile-role">{&props.role}</p>
                </div>
            </div>
            <div class="profile-quote">
                <MessageCircleIcon class="quote-icon" />
                <p class="quote-text">{format!("\"{}\"", props.quote)}</p>
            </div>
        </div>
    }
}

#[function_component(CommunitySection)]
pub fn community_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let reveal = section_ref
                    .cast::<Element>()
                    .and_then(|root| ScrollReveal::mount(&root));
                if let Some(reveal) = &reveal {
                    log::info!("Community section watching {} nodes", reveal.observed_count());
                }
                move || {
                    if let Some(reveal) = reveal {
                        reveal.unmount();
                    }
                }
            },
            (),
        );
    }

    html! {
        <section id="community" ref={section_ref} class="community-section">
            <style>{SECTION_STYLE}</style>
            <div class="community-backdrop"></div>
            <div class="community-content">
                <div class={classes!("community-header", ANIMATE_CLASS, RevealState::Hidden.class())}>
                    <div class="community-header-icons">
                        <UsersIcon class="header-icon large" />
                        <StarIcon class="header-icon" />
                    </div>
                    <p class="community-kicker">{"The Fleet"}</p>
                    <h2 class="section-title">
                        {"Meet Our "}<span class="magenta-glow">{"Alien"}</span>{" Crew"}
                    </h2>
                    <p class="section-subtitle">
                        {"The brave Smoketronians leading our interstellar mission to harvest Etherion and save their civilization."}
                    </p>
                </div>

                <div class="community-grid">
                    {
                        CREW.iter().map(|member| html! {
                            <ProfileCard
                                key={member.name}
                                name={member.name.to_string()}
                                role={member.role.to_string()}
                                image_url={member.image_url.to_string()}
                                quote={member.quote.to_string()}
                                reveal_delay={member.reveal_delay}
                            />
                        }).collect::<Html>()
                    }
                </div>

                <div
                    class={classes!("community-cta", ANIMATE_CLASS, RevealState::Hidden.class())}
                    style={transition_delay_style(CTA_REVEAL_DELAY_MS)}
                >
                    <p class="community-cta-text">
                        {"Join thousands of Earthlings who have already pledged their support to the Smoketron mission."}
                    </p>
                    <Button variant={Variant::Outline} glow={Glow::Magenta} href="https://discord.gg/smoketron">
                        {"Join Our Discord"}
                    </Button>
                </div>
            </div>
        </section>
    }
}

const SECTION_STYLE: &str = r#"
.community-section {
    position: relative;
    padding: 5rem 0;
    overflow: hidden;
}
.community-backdrop {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom, #000, rgba(10, 16, 40, 0.2), #000);
}
.community-content {
    position: relative;
    z-index: 1;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1rem;
}
.community-header {
    text-align: center;
    margin-bottom: 4rem;
}
.community-header-icons {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1rem;
}
.header-icon {
    width: 1.5rem;
    height: 1.5rem;
    color: #ff2ec4;
}
.header-icon.large {
    width: 2rem;
    height: 2rem;
}
.community-kicker {
    color: #ff2ec4;
    font-family: 'Exo 2', sans-serif;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    margin-bottom: 1rem;
}
.magenta-glow {
    color: #ff2ec4;
    text-shadow: 0 0 12px rgba(255, 46, 196, 0.8);
}
.community-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
    margin-bottom: 3rem;
}
@media (min-width: 768px) {
    .community-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1024px) {
    .community-grid { grid-template-columns: repeat(4, 1fr); }
}
.profile-card {
    background: rgba(17, 24, 39, 0.5);
    backdrop-filter: blur(4px);
    border: 1px solid rgba(255, 46, 196, 0.3);
    border-radius: 0.5rem;
    overflow: hidden;
    padding: 1.5rem;
}
.profile-card:hover {
    border-color: rgba(255, 46, 196, 0.7);
}
.profile-card-header {
    display: flex;
    align-items: center;
    margin-bottom: 1rem;
}
.profile-avatar {
    height: 4rem;
    width: 4rem;
    border-radius: 9999px;
    overflow: hidden;
    border: 2px solid rgba(255, 46, 196, 0.5);
    margin-right: 1rem;
    flex-shrink: 0;
}
.profile-avatar-image {
    height: 100%;
    width: 100%;
    background-size: cover;
    background-position: center;
}
.profile-name {
    font-family: 'Orbitron', sans-serif;
    color: #fff;
    font-size: 1.125rem;
    margin: 0;
}
.profile-role {
    color: #ff2ec4;
    font-size: 0.875rem;
    margin: 0;
}
.profile-quote {
    position: relative;
}
.quote-icon {
    position: absolute;
    top: -0.5rem;
    left: -0.5rem;
    width: 1.5rem;
    height: 1.5rem;
    color: rgba(255, 46, 196, 0.3);
}
.quote-text {
    color: #d1d5db;
    font-size: 0.875rem;
    font-style: italic;
    padding-left: 1rem;
    margin: 0;
}
.community-cta {
    text-align: center;
}
.community-cta-text {
    color: #d1d5db;
    margin-bottom: 1.5rem;
}
.animate-on-scroll {
    transition: opacity 0.7s ease, transform 0.7s ease;
}
.reveal-hidden {
    opacity: 0;
    transform: translateY(2.5rem);
}
.reveal-visible {
    opacity: 1;
    transform: translateY(0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn crew_has_four_members() {
        assert_eq!(CREW.len(), 4);
    }

    #[test]
    fn crew_fields_are_non_empty() {
        for member in &CREW {
            assert!(!member.name.is_empty());
            assert!(!member.role.is_empty());
            assert!(!member.quote.is_empty());
            assert!(member.image_url.starts_with("https://"));
        }
    }

    #[test]
    fn each_member_appears_exactly_once() {
        let names: HashSet<_> = CREW.iter().map(|m| m.name).collect();
        let quotes: HashSet<_> = CREW.iter().map(|m| m.quote).collect();
        assert_eq!(names.len(), CREW.len());
        assert_eq!(quotes.len(), CREW.len());
    }

    #[test]
    fn reveal_delays_are_staggered() {
        let delays: Vec<u32> = CREW.iter().map(|m| m.reveal_delay).collect();
        assert_eq!(delays, vec![100, 200, 300, 400]);
    }

    #[test]
    fn delay_is_applied_verbatim() {
        assert_eq!(transition_delay_style(300), "transition-delay: 300ms;");
        assert_eq!(transition_delay_style(0), "transition-delay: 0ms;");
    }

    #[test]
    fn avatar_style_carries_url_and_filter() {
        let style = avatar_style("https://example.com/zorb.jpeg");
        assert!(style.contains("url('https://example.com/zorb.jpeg')"));
        assert!(style.contains("hue-rotate(-30deg)"));
    }
}
