use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::animation::Hover;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::FooterContent;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let content = &props.content;
    let year = Local::now().year();

    let socials = content
        .socials
        .iter()
        .map(|social| {
            html! {
                <a
                    key={social.network.clone()}
                    href={social.url.clone()}
                    class={classes!("social-link", Hover::PopLarge.class())}
                    aria-label={social.network.clone()}
                >
                    {social.network.clone()}
                </a>
            }
        })
        .collect::<Html>();

    let address = content
        .address_lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            html! {
                <>
                    { if i > 0 { html! { <br /> } } else { html! {} } }
                    {line.clone()}
                </>
            }
        })
        .collect::<Html>();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <Reveal class={classes!("footer-grid")}>
                    <div>
                        <h3>{"Contato"}</h3>
                        <div class="footer-stack">
                            <div class={classes!("footer-line", Hover::Nudge.class())}>
                                <span class="footer-icon">{"☎"}</span>
                                <span>{content.phone.clone()}</span>
                            </div>
                            <div class={classes!("footer-line", Hover::Nudge.class())}>
                                <span class="footer-icon">{"✉"}</span>
                                <a href={format!("mailto:{}", content.email)}>{content.email.clone()}</a>
                            </div>
                        </div>
                    </div>
                    <div>
                        <h3>{"Redes Sociais"}</h3>
                        <div class="footer-socials">
                            {socials}
                        </div>
                    </div>
                    <div>
                        <h3>{"Newsletter"}</h3>
                        // Placeholder only, there is no subscription endpoint
                        <div class={classes!("newsletter", Hover::GrowSoft.class())}>
                            <input type="email" placeholder={content.newsletter_placeholder.clone()} />
                            <button type="button" class={Hover::Press.class()}>
                                {content.newsletter_button.clone()}
                            </button>
                        </div>
                    </div>
                    <div>
                        <h3>{"Localização"}</h3>
                        <p class={classes!("footer-address", Hover::Nudge.class())}>
                            {address}
                        </p>
                    </div>
                </Reveal>
                <Reveal class={classes!("footer-bottom")} delay={config::REVEAL.stagger} offset={0.0}>
                    <p>{content.copyright(year)}</p>
                </Reveal>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #ffffff;
                    padding: 4rem 0;
                    font-weight: 300;
                }
                .footer-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                }
                .footer-grid h3 {
                    font-size: 1.25rem;
                    font-weight: 300;
                    margin-bottom: 1.5rem;
                }
                .footer-stack {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .footer-line {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .footer-line a {
                    color: inherit;
                    text-decoration: none;
                }
                .footer-socials {
                    display: flex;
                    gap: 1.5rem;
                }
                .social-link {
                    display: inline-block;
                    color: #ffffff;
                    text-decoration: none;
                }
                .social-link:hover {
                    color: #d1d5db;
                }
                .newsletter {
                    display: flex;
                }
                .newsletter input {
                    flex: 1;
                    padding: 0.5rem 1rem;
                    background: #1f2937;
                    color: #ffffff;
                    border: none;
                    outline: none;
                }
                .newsletter button {
                    padding: 0.5rem 1.5rem;
                    background: #ffffff;
                    color: #111827;
                    border: none;
                    font-weight: 300;
                    cursor: pointer;
                }
                .newsletter button:hover {
                    background: #f3f4f6;
                }
                .footer-bottom {
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                }
                @media (max-width: 1023px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
