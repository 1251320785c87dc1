use std::rc::Rc;
use std::time::Duration;

use log::info;
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::animation::{hover_stylesheet, stagger, AnimationSpec, Hover, Motion, Pose};
use crate::components::footer::Footer;
use crate::components::nav::{fragment_section, scroll_to_section, Header};
use crate::components::reveal::{Entrance, Reveal};
use crate::config;
use crate::content::{ContentCard, EventCard, ServiceCard, SectionId, SiteContent, VisitSection};

/// What gets rendered for one section, independent of the DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOutline {
    pub id: SectionId,
    pub title: String,
    pub columns: u8,
    /// Light or muted background, alternating down the page.
    pub muted: bool,
    /// Reveal delay of each block under the heading, in order.
    pub card_delays: Vec<Duration>,
}

fn columns(id: SectionId) -> u8 {
    match id {
        SectionId::Cinema | SectionId::Services => 4,
        SectionId::Visit => 2,
        SectionId::Dining | SectionId::Events | SectionId::Offers => 3,
    }
}

/// Ordered list of the six content sections between hero and footer.
pub fn outline(content: &SiteContent) -> Vec<SectionOutline> {
    SectionId::ALL
        .iter()
        .enumerate()
        .map(|(position, &id)| SectionOutline {
            id,
            title: content.heading(id).title.clone(),
            columns: columns(id),
            muted: position % 2 == 1,
            card_delays: (0..content.card_count(id))
                .map(|index| stagger(index, config::REVEAL.stagger))
                .collect(),
        })
        .collect()
}

fn overlay_card(card: &ContentCard) -> Html {
    html! {
        <div class={classes!("overlay-card", Hover::Zoom.class())}>
            <img src={card.image_url.clone()} alt={card.title.clone()} loading="lazy" />
            <div class="overlay-card-shade">
                <div>
                    <h3>{card.title.clone()}</h3>
                    <p>{card.description.clone()}</p>
                </div>
            </div>
        </div>
    }
}

fn tile_card(card: &ContentCard, boxed: bool) -> Html {
    html! {
        <div class={classes!("tile-card", boxed.then(|| "boxed"), Hover::Lift.class(), Hover::Zoom.class())}>
            <div class="tile-image">
                <img src={card.image_url.clone()} alt={card.title.clone()} loading="lazy" />
            </div>
            <div class="tile-body">
                <h3>{card.title.clone()}</h3>
                <p>{card.description.clone()}</p>
            </div>
        </div>
    }
}

fn event_card(event: &EventCard) -> Html {
    html! {
        <div class={classes!("tile-card", Hover::Lift.class(), Hover::Zoom.class())}>
            <div class="tile-image">
                <img src={event.image_url.clone()} alt={event.title.clone()} loading="lazy" />
            </div>
            <div class="tile-body">
                <h3>{event.title.clone()}</h3>
                <p>{event.date_label()}</p>
            </div>
        </div>
    }
}

fn service_card(service: &ServiceCard) -> Html {
    html! {
        <div class={classes!("service-card", Hover::LiftShadow.class())}>
            <h3>{service.name.clone()}</h3>
            <p>{service.description.clone()}</p>
        </div>
    }
}

fn visit_blocks(visit: &VisitSection) -> Vec<Html> {
    let lines = visit
        .hours
        .iter()
        .map(|line| ("🕙", line))
        .chain(std::iter::once(("📍", &visit.address)))
        .map(|(icon, line)| {
            html! {
                <div class={classes!("info-line", Hover::Nudge.class())}>
                    <span class="info-icon">{icon}</span>
                    <div>
                        <p class="info-label">{line.label.clone()}</p>
                        <p class="info-value">{line.value.clone()}</p>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    vec![
        html! {
            <div class="visit-info">
                <h3>{visit.info_title.clone()}</h3>
                <div class="info-lines">{lines}</div>
            </div>
        },
        html! {
            <div class={classes!("visit-image", Hover::GrowSoft.class())}>
                <img src={visit.image_url.clone()} alt={visit.image_alt.clone()} loading="lazy" />
            </div>
        },
    ]
}

fn section_blocks(id: SectionId, content: &SiteContent) -> Vec<Html> {
    match id {
        SectionId::Dining => content.dining.items.iter().map(overlay_card).collect(),
        SectionId::Cinema => content.cinema.items.iter().map(|card| tile_card(card, true)).collect(),
        SectionId::Events => content.events.items.iter().map(event_card).collect(),
        SectionId::Offers => content.offers.items.iter().map(|card| tile_card(card, false)).collect(),
        SectionId::Visit => visit_blocks(&content.visit),
        SectionId::Services => content.services.items.iter().map(service_card).collect(),
    }
}

fn render_section(section: &SectionOutline, content: &SiteContent) -> Html {
    let heading = content.heading(section.id);
    let blocks = section_blocks(section.id, content)
        .into_iter()
        .zip(section.card_delays.iter())
        .enumerate()
        .map(|(index, (block, delay))| {
            html! {
                <Reveal key={index.to_string()} delay={*delay}>
                    {block}
                </Reveal>
            }
        })
        .collect::<Html>();

    html! {
        <section
            key={section.id.anchor()}
            id={section.id.anchor()}
            class={classes!("page-section", section.muted.then(|| "muted"))}
        >
            <div class="section-content">
                <Reveal>
                    <h2 class="section-heading">{heading.title.clone()}</h2>
                    <p class="section-subheading">{heading.subtitle.clone()}</p>
                </Reveal>
                <div class={classes!("card-grid", format!("grid-{}", section.columns))}>
                    {blocks}
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    pub tagline: AttrValue,
    pub image_url: AttrValue,
    pub image_alt: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let second = Duration::from_millis(1000);
    let backdrop = Motion::new(
        Pose::below(20.0),
        AnimationSpec::tween(second).with_delay(Duration::from_millis(500)),
    );
    let title = Motion::new(
        Pose::below(config::REVEAL.offset),
        AnimationSpec::tween(second).with_delay(Duration::from_millis(800)),
    );
    let tagline = Motion::new(
        Pose::below(config::REVEAL.offset),
        AnimationSpec::tween(second).with_delay(Duration::from_millis(1100)),
    );

    html! {
        <section class="hero">
            <img class="hero-image" src={props.image_url.clone()} alt={props.image_alt.clone()} />
            <div class="hero-overlay"></div>
            <Entrance class={classes!("hero-content")} motion={backdrop}>
                <div>
                    <Entrance motion={title}>
                        <h1 class="hero-title">{props.title.clone()}</h1>
                    </Entrance>
                    <Entrance motion={tagline}>
                        <p class="hero-tagline">{props.tagline.clone()}</p>
                    </Entrance>
                </div>
            </Entrance>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct MallPageProps {
    pub content: Rc<SiteContent>,
}

#[function_component(MallPage)]
pub fn mall_page(props: &MallPageProps) -> Html {
    let sections = use_memo(|content| outline(content), props.content.clone());

    // Honour deep links such as /#servicos once the sections exist
    use_mount(|| {
        if let Some(id) = fragment_section() {
            info!("Opening at #{}", id);
            scroll_to_section(id.anchor());
        }
    });

    let content = &props.content;
    let hovers = hover_stylesheet();
    let page_css = PAGE_CSS.replace("{anchor_margin}", &config::ANCHOR_SCROLL_MARGIN.to_string());

    html! {
        <div class="mall-page">
            <Header brand={content.brand.name.clone()} items={content.nav.clone()} />
            <Hero
                title={content.brand.hero_title.clone()}
                tagline={content.brand.tagline.clone()}
                image_url={content.brand.hero_image_url.clone()}
                image_alt={content.brand.hero_image_alt.clone()}
            />
            { for sections.iter().map(|section| render_section(section, content)) }
            <Footer content={content.footer.clone()} />
            <style>{hovers}</style>
            <style>{page_css}</style>
        </div>
    }
}

const PAGE_CSS: &str = r#"
    .mall-page {
        min-height: 100vh;
        background: #ffffff;
        color: #1f2937;
        font-family: 'Helvetica Neue', Arial, sans-serif;
    }
    .hero {
        position: relative;
        height: 100vh;
        overflow: hidden;
    }
    .hero-image {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.3));
    }
    .hero-content {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 0 1rem;
    }
    .hero-title {
        font-size: 3.75rem;
        font-weight: 300;
        letter-spacing: 0.05em;
        color: #ffffff;
        margin-bottom: 1.5rem;
    }
    .hero-tagline {
        font-size: 1.5rem;
        font-weight: 300;
        letter-spacing: 0.025em;
        color: #ffffff;
    }
    .page-section {
        padding: 6rem 0;
        background: #ffffff;
        scroll-margin-top: {anchor_margin}px;
    }
    .page-section.muted {
        background: #f9fafb;
    }
    .section-content {
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .section-heading {
        font-size: 2.5rem;
        font-weight: 300;
        text-align: center;
        letter-spacing: 0.05em;
        margin-bottom: 1rem;
    }
    .section-subheading {
        font-size: 1.25rem;
        font-weight: 300;
        text-align: center;
        color: #6b7280;
        margin-bottom: 4rem;
    }
    .card-grid {
        display: grid;
        gap: 3rem;
        align-items: center;
    }
    .grid-2 { grid-template-columns: repeat(2, 1fr); gap: 4rem; }
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
    .grid-4 { grid-template-columns: repeat(4, 1fr); gap: 2rem; }
    .overlay-card {
        position: relative;
        overflow: hidden;
    }
    .overlay-card img {
        width: 100%;
        height: 24rem;
        object-fit: cover;
        display: block;
    }
    .overlay-card-shade {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.4);
        display: flex;
        align-items: flex-end;
        padding: 2rem;
    }
    .overlay-card-shade h3 {
        font-size: 1.5rem;
        font-weight: 300;
        color: #ffffff;
        margin-bottom: 0.5rem;
    }
    .overlay-card-shade p {
        color: rgba(255, 255, 255, 0.8);
    }
    .tile-card {
        cursor: pointer;
    }
    .tile-card.boxed {
        background: #ffffff;
    }
    .tile-image {
        overflow: hidden;
    }
    .tile-image img {
        width: 100%;
        height: 20rem;
        object-fit: cover;
        display: block;
    }
    .tile-card.boxed .tile-image img {
        height: 18rem;
    }
    .tile-body {
        margin-top: 1.5rem;
    }
    .tile-card.boxed .tile-body {
        margin-top: 0;
        padding: 1.5rem;
    }
    .tile-body h3 {
        font-size: 1.5rem;
        font-weight: 300;
        margin-bottom: 0.5rem;
    }
    .tile-card.boxed .tile-body h3 {
        font-size: 1.25rem;
    }
    .tile-body p {
        color: #4b5563;
    }
    .visit-info h3 {
        font-size: 1.5rem;
        font-weight: 300;
        margin-bottom: 2rem;
    }
    .info-lines {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .info-line {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .info-icon {
        font-size: 1.5rem;
    }
    .info-label {
        font-weight: 300;
    }
    .info-value {
        color: #4b5563;
    }
    .visit-image {
        height: 24rem;
        border-radius: 0.5rem;
        overflow: hidden;
        background: #f3f4f6;
    }
    .visit-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .service-card {
        background: #ffffff;
        padding: 2rem;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .service-card h3 {
        font-size: 1.25rem;
        font-weight: 300;
        margin-bottom: 1rem;
    }
    .service-card p {
        color: #4b5563;
    }
    @media (max-width: 1023px) {
        .grid-2, .grid-3, .grid-4 {
            grid-template-columns: 1fr;
        }
        .hero-title {
            font-size: 2.5rem;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> SiteContent {
        SiteContent::bundled().expect("bundled content")
    }

    #[test]
    fn test_sections_follow_nav_order() {
        let sections = outline(&content());
        let anchors: Vec<&str> = sections.iter().map(|s| s.id.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["gastronomia", "cinema", "eventos", "ofertas", "visitar", "servicos"]
        );
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles[0], "Gastronomia");
        assert_eq!(titles[5], "Serviços Exclusivos");
    }

    #[test]
    fn test_every_nav_item_has_a_section() {
        let content = content();
        let sections = outline(&content);
        for item in &content.nav {
            let anchor = item.href().trim_start_matches('#').to_string();
            assert!(
                sections.iter().any(|s| s.id.anchor() == anchor),
                "no section for {}",
                item.href()
            );
        }
    }

    #[test]
    fn test_card_delays_are_staggered() {
        let sections = outline(&content());
        for section in &sections {
            assert_eq!(section.card_delays.first(), Some(&Duration::ZERO));
            for pair in section.card_delays.windows(2) {
                assert!(pair[1] - pair[0] >= Duration::from_millis(200));
            }
        }
        let offers = sections.iter().find(|s| s.id == SectionId::Offers).unwrap();
        assert_eq!(
            offers.card_delays,
            vec![Duration::ZERO, Duration::from_millis(200), Duration::from_millis(400)]
        );
    }

    #[test]
    fn test_visit_reveals_info_then_image() {
        let sections = outline(&content());
        let visit = sections.iter().find(|s| s.id == SectionId::Visit).unwrap();
        assert_eq!(visit.card_delays, vec![Duration::ZERO, Duration::from_millis(200)]);
        assert_eq!(visit.columns, 2);
    }

    #[test]
    fn test_backgrounds_alternate() {
        let muted: Vec<bool> = outline(&content()).iter().map(|s| s.muted).collect();
        assert_eq!(muted, vec![false, true, false, true, false, true]);
    }

    #[test]
    fn test_outline_tracks_custom_content() {
        let mut content = content();
        content.services.items.truncate(2);
        let sections = outline(&content);
        let services = sections.last().unwrap();
        assert_eq!(services.id, SectionId::Services);
        assert_eq!(services.card_delays.len(), 2);
        assert_eq!(services.columns, 4);
    }
}
