use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::components::icon::IconBadge;
use crate::components::principle_popup::{use_popup, PrinciplePopup};
use crate::components::typing_text::TypedTagline;
use crate::config::LandingConfig;
use crate::content::{
    footer_text, CTA_LABEL, PRINCIPLES, PRODUCT_NAME, TAGLINES, TESTIMONIAL_AUTHOR,
    TESTIMONIAL_QUOTE, TOOLS,
};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_default]
    pub config: LandingConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let taglines = use_memo(
        |_| TAGLINES.iter().map(|t| t.to_string()).collect::<Rc<[String]>>(),
        (),
    );
    let popup = use_popup(props.config.popup);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <div class="mobile-frame">
                <div class="frame-scroll">
                    <header class="hero">
                        <h1 class="hero-title">{PRODUCT_NAME}</h1>
                        <TypedTagline phrases={(*taglines).clone()} config={props.config.typing} />
                        <p class="hero-intro">
                            {"We empower your business with ethical, secure, and private operational solutions, giving you true "}
                            <span class="highlight">{"Virtual Freedom"}</span>{"."}
                        </p>
                    </header>

                    <section class="freedom-visual">
                        <div class="orb">
                            <div class="orb-halo"></div>
                            <div class="orb-ring"></div>
                            <div class="orb-core"><span>{"VF"}</span></div>
                        </div>
                        <h2>{"Experience Virtual Freedom"}</h2>
                        <p>{"Operate, connect, and grow without compromise. Your digital space, secured and private, by design."}</p>
                    </section>

                    <section class="pillars">
                        <h2 class="section-title">{"Our Pillars"}</h2>
                        <div class="pillar-list">
                            { for PRINCIPLES.iter().map(|principle| {
                                let select = popup.select.clone();
                                let id = principle.id;
                                let onclick = Callback::from(move |_: MouseEvent| select.emit(id));
                                html! {
                                    <button key={principle.id} class="pillar-card" {onclick}>
                                        <IconBadge theme={principle.theme} />
                                        <div class="pillar-text">
                                            <h3>{principle.title}</h3>
                                            <p>{principle.description}</p>
                                        </div>
                                        <span class="pillar-chevron">{"›"}</span>
                                    </button>
                                }
                            }) }
                        </div>
                    </section>

                    <section class="tools">
                        <h2 class="section-title">{"Empowerment Tools"}</h2>
                        <div class="tool-grid">
                            { for TOOLS.iter().enumerate().map(|(index, tool)| html! {
                                <div
                                    key={tool.label}
                                    class={classes!("tool-card", tool.theme.class())}
                                    style={format!("animation-delay: {}ms;", index * 100)}
                                    data-icon={tool.icon}
                                >
                                    <div class="tool-icon">
                                        <IconBadge theme={tool.theme} size="icon-tool" />
                                    </div>
                                    <p>{tool.label}</p>
                                </div>
                            }) }
                        </div>
                        <p class="tools-note">
                            {"Leveraging "}<span class="highlight">{"Open Source"}</span>{" for transparency and trust."}
                        </p>
                    </section>

                    <section class="testimonial">
                        <blockquote>
                            <p class="quote">{TESTIMONIAL_QUOTE}</p>
                            <p class="author">{TESTIMONIAL_AUTHOR}</p>
                        </blockquote>
                    </section>

                    <section class="cta">
                        <button class="cta-button">
                            <span class="cta-fill"></span>
                            <span class="cta-label">{CTA_LABEL}</span>
                            <span class="cta-shine"></span>
                        </button>
                    </section>
                </div>

                <footer class="frame-footer">{footer_text(year)}</footer>

                <PrinciplePopup state={popup.state.clone()} on_dismiss={popup.dismiss.clone()} />
            </div>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    @keyframes slow-spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
    @keyframes subtle-pulse { 0%, 100% { opacity: 0.7; transform: scale(1); } 50% { opacity: 1; transform: scale(1.03); } }
    @keyframes subtle-float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-6px); } }
    @keyframes blink { from, to { opacity: 1; } 50% { opacity: 0; } }
    @keyframes tool-icon-float {
        0%, 100% { transform: translateY(0) rotate(0deg); }
        50% { transform: translateY(-3px) rotate(5deg); }
    }
    @keyframes tool-glow {
        0%, 100% { box-shadow: 0 0 15px -5px var(--glow-start); }
        50% { box-shadow: 0 0 25px 0 var(--glow-end); }
    }

    .landing-page {
        display: flex;
        align-items: center;
        justify-content: center;
        min-height: 100vh;
        padding: 1rem;
        background: linear-gradient(135deg, #111827, #000, #111827);
        font-family: system-ui, sans-serif;
    }
    .mobile-frame {
        position: relative;
        display: flex;
        flex-direction: column;
        width: 375px;
        height: 812px;
        overflow: hidden;
        background: #000;
        border: 4px solid #1f2937;
        border-radius: 40px;
        box-shadow: 0 25px 50px -12px rgba(88, 28, 135, 0.5);
        color: #fff;
    }
    .frame-scroll {
        flex: 1;
        overflow-y: auto;
        padding: 1.5rem 1.25rem 0;
        scrollbar-width: none;
    }
    .frame-scroll::-webkit-scrollbar { display: none; }

    .theme-purple { --accent: rgba(168, 85, 247, 0.25); --glow-start: rgba(192, 132, 252, 0.2); --glow-end: rgba(192, 132, 252, 0.5); }
    .theme-blue { --accent: rgba(59, 130, 246, 0.25); --glow-start: rgba(96, 165, 250, 0.2); --glow-end: rgba(96, 165, 250, 0.5); }
    .theme-teal { --accent: rgba(20, 184, 166, 0.25); --glow-start: rgba(45, 212, 191, 0.2); --glow-end: rgba(45, 212, 191, 0.5); }
    .theme-indigo { --accent: rgba(99, 102, 241, 0.25); --glow-start: rgba(129, 140, 248, 0.2); --glow-end: rgba(129, 140, 248, 0.5); }

    .hero {
        display: flex;
        flex-direction: column;
        justify-content: center;
        min-height: 180px;
        padding: 2rem 0 2.5rem;
        text-align: center;
    }
    .hero-title {
        margin: 0 0 0.75rem;
        font-size: 3rem;
        font-weight: 700;
        background: linear-gradient(90deg, #c084fc, #d946ef);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-tagline {
        height: 1.5rem;
        margin-bottom: 0.75rem;
        overflow: hidden;
        white-space: nowrap;
        text-overflow: ellipsis;
        color: rgba(216, 180, 254, 0.9);
        font-weight: 500;
    }
    .typing-cursor {
        display: inline-block;
        width: 2px;
        height: 1.25rem;
        margin-left: 0.25rem;
        vertical-align: middle;
        background: #c084fc;
        animation: blink 1s step-end infinite;
    }
    .hero-intro, .freedom-visual p {
        max-width: 280px;
        margin: 0 auto;
        color: #9ca3af;
        font-size: 0.875rem;
        line-height: 1.6;
    }
    .highlight { color: #c084fc; font-weight: 500; }

    .freedom-visual { margin: 2.5rem 0; text-align: center; }
    .freedom-visual h2 { margin: 0 0 0.5rem; font-size: 1.5rem; color: #e5e7eb; }
    .orb { position: relative; width: 12rem; height: 12rem; margin: 0 auto 1.25rem; }
    .orb-halo {
        position: absolute;
        inset: 0;
        border-radius: 50%;
        background: linear-gradient(135deg, #7e22ce, #86198f, #581c87);
        filter: blur(24px);
        opacity: 0.5;
        animation: subtle-pulse 5s ease-in-out infinite;
    }
    .orb-ring {
        position: absolute;
        inset: 2rem;
        border: 2px solid rgba(168, 85, 247, 0.3);
        border-radius: 50%;
        opacity: 0.6;
        animation: slow-spin 35s linear infinite;
    }
    .orb-core {
        position: absolute;
        inset: 3rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 50%;
        background: linear-gradient(315deg, #111827, #000);
        animation: subtle-float 6s ease-in-out infinite;
    }
    .orb-core span { font-size: 2.25rem; font-weight: 700; color: #d8b4fe; }

    .section-title { margin: 0 0 1.25rem; text-align: center; font-size: 1.25rem; color: rgba(216, 180, 254, 0.8); }
    .pillars, .tools { margin-bottom: 2.5rem; }
    .pillar-list { display: flex; flex-direction: column; gap: 0.875rem; }
    .pillar-card {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        width: 100%;
        padding: 0.875rem;
        text-align: left;
        color: inherit;
        background: linear-gradient(135deg, rgba(17, 24, 39, 0.7), rgba(31, 41, 55, 0.5));
        border: 1px solid rgba(55, 65, 81, 0.6);
        border-radius: 0.75rem;
        cursor: pointer;
        transition: transform 0.3s ease-out, border-color 0.3s ease-out;
    }
    .pillar-card:hover { transform: scale(1.02); border-color: rgba(147, 51, 234, 0.5); }
    .pillar-text { flex: 1; }
    .pillar-text h3 { margin: 0; font-size: 0.875rem; }
    .pillar-text p { margin: 0; font-size: 0.75rem; color: #9ca3af; }
    .pillar-chevron { color: rgba(192, 132, 252, 0.6); }

    .icon-badge { position: relative; flex-shrink: 0; }
    .icon-md { width: 2rem; height: 2rem; }
    .icon-lg { width: 2.5rem; height: 2.5rem; }
    .icon-tool { width: 2.25rem; height: 2.25rem; }
    .icon-ring {
        position: absolute;
        inset: 0;
        border-radius: 50%;
        background: var(--accent);
        border: 1px solid rgba(192, 132, 252, 0.3);
        transition: transform 0.5s ease-out;
    }
    .icon-core { position: absolute; inset: 0.375rem; border-radius: 50%; background: #030712; }
    .icon-glow {
        position: absolute;
        inset: 0.625rem;
        border-radius: 50%;
        background: rgba(147, 51, 234, 0.4);
        filter: blur(4px);
        opacity: 0;
        transform: scale(0.5);
        transition: all 0.3s ease-out;
    }
    .icon-glow.lit { opacity: 0.8; transform: scale(0.9); }
    .pillar-card:hover .icon-ring, .tool-card:hover .icon-ring { transform: scale(1.1) rotate(10deg); }
    .pillar-card:hover .icon-glow { opacity: 1; transform: scale(0.9); }
    .tool-card:hover .icon-glow { opacity: 0.7; transform: scale(1); }

    .tool-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
    .tool-card {
        padding: 1rem;
        text-align: center;
        background: rgba(31, 41, 55, 0.6);
        border: 1px solid rgba(55, 65, 81, 0.5);
        border-radius: 0.5rem;
        animation: tool-glow 2.5s ease-in-out infinite;
        transition: transform 0.3s;
    }
    .tool-card:hover { transform: translateY(-4px); }
    .tool-icon { display: flex; justify-content: center; margin-bottom: 0.5rem; }
    .tool-card:hover .tool-icon { animation: tool-icon-float 1.5s ease-in-out infinite; }
    .tool-card p { margin: 0; font-size: 0.75rem; color: #d1d5db; }
    .tools-note { margin-top: 1rem; text-align: center; font-size: 0.75rem; color: #6b7280; }

    .testimonial { margin-bottom: 3rem; padding: 0 1rem; }
    .testimonial blockquote {
        margin: 0;
        padding: 0.5rem 0 0.5rem 1rem;
        border-left: 4px solid #9333ea;
        border-radius: 0 0.5rem 0.5rem 0;
        background: rgba(31, 41, 55, 0.4);
    }
    .testimonial .quote { margin: 0; font-size: 0.875rem; font-style: italic; color: #d1d5db; }
    .testimonial .author { margin: 0.25rem 0 0; font-size: 0.75rem; color: #6b7280; }

    .cta { padding-bottom: 2rem; text-align: center; }
    .cta-button {
        position: relative;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        padding: 0.875rem 2.5rem;
        overflow: hidden;
        font-weight: 700;
        color: #fff;
        background: linear-gradient(90deg, #9333ea, #a21caf);
        border: none;
        border-radius: 0.5rem;
        cursor: pointer;
    }
    .cta-button:active { transform: scale(0.95); }
    .cta-fill {
        position: absolute;
        inset: 0;
        background: linear-gradient(90deg, #a855f7, #c026d3, #6b21a8);
        opacity: 0;
        transition: opacity 0.5s;
    }
    .cta-button:hover .cta-fill { opacity: 1; }
    .cta-label { position: relative; }
    .cta-shine {
        position: absolute;
        inset: 0;
        background: #fff;
        opacity: 0.1;
        transform: translateX(-100%);
        transition: transform 0.5s ease-out;
    }
    .cta-button:hover .cta-shine { transform: translateX(100%) skewX(12deg); }

    .frame-footer {
        padding: 0.875rem;
        text-align: center;
        font-size: 0.75rem;
        color: #4b5563;
        border-top: 1px solid rgba(31, 41, 55, 0.5);
    }

    .popup-layer {
        position: absolute;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: flex-end;
        justify-content: center;
        transition: opacity 0.3s ease-out;
    }
    .popup-layer.hidden { opacity: 0; pointer-events: none; }
    .popup-backdrop {
        position: absolute;
        inset: 0;
        background: linear-gradient(0deg, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.5));
        backdrop-filter: blur(16px);
        opacity: 0;
        transition: opacity 0.3s ease-out;
    }
    .popup-backdrop.shown { opacity: 1; }
    .popup-sheet {
        position: relative;
        width: 100%;
        max-height: 70vh;
        overflow-y: auto;
        padding: 2rem 1.5rem 1.5rem;
        background: linear-gradient(180deg, rgba(17, 24, 39, 0.9), rgba(0, 0, 0, 0.95));
        border-top: 2px solid rgba(168, 85, 247, 0.8);
        border-radius: 1.5rem 1.5rem 0 0;
        transform: translateY(100%);
        transition: transform 0.3s ease-out;
    }
    .popup-sheet.shown { transform: translateY(0); }
    .popup-handle {
        position: absolute;
        top: 0.75rem;
        left: 50%;
        width: 3rem;
        height: 0.375rem;
        transform: translateX(-50%);
        border-radius: 9999px;
        background: #4b5563;
    }
    .popup-heading { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.25rem; }
    .popup-heading h3 { margin: 0; font-size: 1.25rem; color: #d8b4fe; }
    .popup-details { margin: 0 0 1.5rem; font-size: 0.875rem; line-height: 1.6; color: #d1d5db; }
    .popup-actions { display: flex; flex-direction: column; gap: 0.75rem; }
    .popup-explore, .popup-close {
        width: 100%;
        padding: 0.625rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        cursor: pointer;
    }
    .popup-explore { font-size: 0.875rem; color: #e9d5ff; background: linear-gradient(90deg, #9333ea, #a21caf); }
    .popup-close { font-size: 0.75rem; color: #9ca3af; background: rgba(55, 65, 81, 0.6); }
"#;
