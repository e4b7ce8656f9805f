use gloo_timers::callback::Timeout;
use log::Level;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::{
    About, Certificate, ContactDetails, Profile, Project, Skill, SkillGroup, SiteContent,
    SocialLinks, Testimonial,
};
use crate::logging::{self, log_event};
use crate::menu::{MenuAction, MobileMenu};
use crate::sections::{SectionId, SectionTracker, SectionVisibility};
use crate::theme::{StyleSet, Theme, ThemeManager};
use crate::typewriter::{Phase, TickToken, Typewriter, TypewriterTimings};

const MOUNT_POINT_ID: &str = "app";

impl Reducible for ThemeManager {
    type Action = Theme;

    fn reduce(self: Rc<Self>, theme: Theme) -> Rc<Self> {
        let mut next = (*self).clone();
        if !next.set_theme(theme) {
            return self;
        }

        log_event(
            Level::Debug,
            "theme_changed",
            serde_json::json!({
                "from": self.theme().as_str(),
                "to": theme.as_str(),
            }),
        );
        Rc::new(next)
    }
}

impl Reducible for SectionTracker {
    type Action = Vec<SectionVisibility>;

    fn reduce(self: Rc<Self>, batch: Vec<SectionVisibility>) -> Rc<Self> {
        let mut next = (*self).clone();
        if !next.observe_batch(batch) {
            return self;
        }

        log_event(
            Level::Debug,
            "active_section_changed",
            serde_json::json!({
                "from": self.active().as_str(),
                "to": next.active().as_str(),
            }),
        );
        Rc::new(next)
    }
}

impl Reducible for MobileMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            return self;
        }

        log_event(
            Level::Debug,
            "menu_toggled",
            serde_json::json!({ "open": next.is_open() }),
        );
        Rc::new(next)
    }
}

impl Reducible for Typewriter {
    type Action = TickToken;

    fn reduce(self: Rc<Self>, token: TickToken) -> Rc<Self> {
        let mut next = (*self).clone();
        if !next.advance_with(token) {
            return self;
        }

        if next.phase() == Phase::Typing && next.char_index() == 0 {
            log_event(
                Level::Trace,
                "typewriter_phrase_started",
                serde_json::json!({ "phrase_index": next.phrase_index() }),
            );
        }
        Rc::new(next)
    }
}

/// Keeps the viewport observer alive while the page is mounted.
struct SectionObserver {
    observer: IntersectionObserver,
    observed: Vec<Element>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionObserver {
    fn register(threshold: f64, tracker: UseReducerDispatcher<SectionTracker>) -> Option<Self> {
        let document = window()?.document()?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<SectionVisibility> = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| {
                        SectionVisibility::new(
                            entry.target().id(),
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        )
                    })
                    .collect();

                if !batch.is_empty() {
                    tracker.dispatch(batch);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        let mut observed = Vec::new();
        for id in SectionId::ALL {
            match document.get_element_by_id(id.as_str()) {
                Some(element) => {
                    observer.observe(&element);
                    observed.push(element);
                }
                None => log_event(
                    Level::Debug,
                    "section_missing",
                    serde_json::json!({ "section": id.as_str() }),
                ),
            }
        }

        Some(Self {
            observer,
            observed,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        for element in &self.observed {
            self.observer.unobserve(element);
        }
        self.observer.disconnect();
    }
}

fn scroll_to_section(id: SectionId) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id.as_str()))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    label: AttrValue,
    #[prop_or_default]
    children: Html,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={(!props.label.is_empty()).then(|| props.label.clone())}
        >
            {props.children.clone()}
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct SocialRowProps {
    styles: StyleSet,
    links: SocialLinks,
    #[prop_or(AttrValue::from("w-10 h-10"))]
    size: AttrValue,
}

#[function_component(SocialRow)]
fn social_row(props: &SocialRowProps) -> Html {
    let class = classes!(
        props.size.to_string(),
        props.styles.card_bg,
        "rounded-full",
        "flex",
        "items-center",
        "justify-center",
        "transition-transform",
        "hover:-translate-y-1",
    );

    html! {
        <div class="flex gap-4">
            <ExternalLink href={props.links.linkedin.clone()} label="LinkedIn" class={class.clone()}>
                <span aria-hidden="true">{"in"}</span>
            </ExternalLink>
            <ExternalLink href={props.links.github.clone()} label="GitHub" class={class.clone()}>
                <span aria-hidden="true">{"gh"}</span>
            </ExternalLink>
            <ExternalLink href={props.links.twitter.clone()} label="Twitter" class={class}>
                <span aria-hidden="true">{"tw"}</span>
            </ExternalLink>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BrandProps {
    styles: StyleSet,
    first_name: AttrValue,
    last_name: AttrValue,
    #[prop_or_default]
    class: Classes,
}

#[function_component(Brand)]
fn brand(props: &BrandProps) -> Html {
    html! {
        <div class={classes!("font-bold", props.styles.heading, props.class.clone())}>
            <span class={props.styles.accent}>{props.first_name.clone()}</span>
            {" "}
            {props.last_name.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ThemeSwitcherProps {
    current: Theme,
    styles: StyleSet,
    on_select: Callback<Theme>,
}

#[function_component(ThemeSwitcher)]
fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    html! {
        <div class="fixed top-6 right-6 z-50 flex gap-2">
            { for Theme::ALL.into_iter().map(|theme| {
                let active = theme == props.current;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_| on_select.emit(theme))
                };
                html! {
                    <button
                        key={theme.as_str()}
                        type="button"
                        class={classes!(
                            "p-2",
                            "rounded-full",
                            if active { props.styles.accent_bg } else { "bg-gray-800" },
                        )}
                        aria-label={theme.label()}
                        aria-pressed={active.to_string()}
                        onclick={onclick}
                    >
                        <span
                            aria-hidden="true"
                            class={if active { "text-white" } else { "text-gray-400" }}
                        >
                            {theme.icon()}
                        </span>
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavProps {
    styles: StyleSet,
    profile: Profile,
    active: SectionId,
}

#[function_component(DesktopNav)]
fn desktop_nav(props: &NavProps) -> Html {
    let styles = props.styles;

    html! {
        <nav class={classes!("hidden", "md:flex", "justify-between", "items-center", "h-24", "px-10", "lg:px-20", styles.nav_bg)}>
            <Brand
                styles={styles}
                first_name={props.profile.first_name.clone()}
                last_name={props.profile.last_name.clone()}
                class="text-3xl"
            />
            <ul class="flex gap-8">
                { for SectionId::NAV.into_iter().map(|id| {
                    let active = id == props.active;
                    html! {
                        <li key={id.as_str()}>
                            <a
                                href={id.anchor()}
                                class={classes!(
                                    "text-lg",
                                    "transition-colors",
                                    active.then_some(styles.accent),
                                    active.then_some("border-b-2 border-current"),
                                )}
                                aria-current={active.then_some("location")}
                            >
                                {id.title()}
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct MobileNavProps {
    styles: StyleSet,
    profile: Profile,
    menu: MobileMenu,
    on_menu: Callback<MenuAction>,
}

#[function_component(MobileNav)]
fn mobile_nav(props: &MobileNavProps) -> Html {
    let styles = props.styles;
    let open = props.menu.is_open();

    let on_toggle = {
        let on_menu = props.on_menu.clone();
        Callback::from(move |_| on_menu.emit(MenuAction::Toggle))
    };

    let on_link = {
        let on_menu = props.on_menu.clone();
        Callback::from(move |_| on_menu.emit(MenuAction::LinkActivated))
    };

    html! {
        <nav class={classes!("md:hidden", "flex", "justify-between", "items-center", "h-20", "px-6", styles.nav_bg)}>
            <Brand
                styles={styles}
                first_name={props.profile.first_name.clone()}
                last_name={props.profile.last_name.clone()}
                class="text-2xl"
            />
            <div class="relative">
                <button
                    type="button"
                    class="flex flex-col justify-between w-8 h-6"
                    aria-label={props.menu.button_label()}
                    aria-expanded={open.to_string()}
                    onclick={on_toggle}
                >
                    <span class={classes!("w-full", "h-0.5", "bg-current", "transition-transform", open.then_some("rotate-45 translate-y-2.5"))}></span>
                    <span class={classes!("w-full", "h-0.5", "bg-current", "transition-opacity", open.then_some("opacity-0"))}></span>
                    <span class={classes!("w-full", "h-0.5", "bg-current", "transition-transform", open.then_some("-rotate-45 -translate-y-2.5"))}></span>
                </button>

                if open {
                    <div class={classes!("absolute", "right-0", "mt-2", "w-48", "rounded-lg", "shadow-lg", "overflow-hidden", "z-50", styles.card_bg)}>
                        <ul class="py-2">
                            { for SectionId::NAV.into_iter().map(|id| html! {
                                <li key={id.as_str()}>
                                    <a
                                        href={id.anchor()}
                                        class={classes!("block", "px-4", "py-2", styles.text)}
                                        onclick={on_link.clone()}
                                    >
                                        {id.title()}
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>
                }
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct TypedLineProps {
    timings: TypewriterTimings,
}

#[function_component(TypedLine)]
fn typed_line(props: &TypedLineProps) -> Html {
    let typewriter = use_reducer({
        let timings = props.timings;
        move || Typewriter::with_timings(timings)
    });

    {
        let dispatcher = typewriter.dispatcher();
        let delay = typewriter.next_delay();
        use_effect_with(typewriter.token(), move |token| {
            let token = *token;
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            let timeout = Timeout::new(millis, move || dispatcher.dispatch(token));
            move || drop(timeout)
        });
    }

    html! {
        <p class="text-xl md:text-2xl" aria-live="off">
            {typewriter.text().to_string()}
            <span class="animate-pulse" aria-hidden="true">{"|"}</span>
        </p>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    styles: StyleSet,
    eyebrow: AttrValue,
    title: AttrValue,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="text-center mb-16">
            <p class={classes!(props.styles.accent, "mb-2")}>{props.eyebrow.clone()}</p>
            <h2 class={classes!("text-4xl", "font-bold", props.styles.heading)}>{props.title.clone()}</h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    styles: StyleSet,
    profile: Profile,
    timings: TypewriterTimings,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let styles = props.styles;
    let profile = &props.profile;
    let on_contact = Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Contact));

    html! {
        <section
            id={SectionId::Profile.as_str()}
            class="relative min-h-[calc(100vh-6rem)] flex flex-col md:flex-row items-center justify-center gap-10 px-6 md:px-20"
        >
            <div class={classes!("w-64", "h-64", "md:w-80", "md:h-80", "rounded-full", "overflow-hidden", "border-4", "shadow-lg", styles.accent)}>
                <img src={profile.photo.clone()} alt={profile.full_name()} class="w-full h-full object-cover" />
            </div>

            <div class="text-center md:text-left">
                <p class={classes!(styles.accent, "mb-2")}>{profile.greeting.clone()}</p>
                <h1 class={classes!("text-4xl", "md:text-6xl", "font-bold", "mb-2", styles.heading)}>{profile.full_name()}</h1>
                <div class="h-8 mb-6">
                    <TypedLine timings={props.timings} />
                </div>

                <div class="flex flex-wrap gap-4 justify-center md:justify-start">
                    <a
                        href={profile.cv_href.clone()}
                        download={profile.cv_file_name.clone()}
                        class={classes!("px-6", "py-3", "bg-transparent", "border-2", "border-current", "rounded-full", "transition-colors", styles.accent)}
                    >
                        {"Download CV"}
                    </a>
                    <button
                        type="button"
                        class={classes!("px-6", "py-3", "rounded-full", "transition-colors", styles.button_bg, styles.button_text)}
                        onclick={on_contact}
                    >
                        {"Contact Me"}
                    </button>
                </div>

                <div class="mt-8 flex justify-center md:justify-start">
                    <SocialRow styles={styles} links={profile.links.clone()} />
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2">
                <a href={SectionId::About.anchor()} class={classes!("flex", "flex-col", "items-center", styles.accent)}>
                    <span class="text-sm mb-2">{"Scroll Down"}</span>
                    <span class="animate-bounce" aria-hidden="true">{"⌄"}</span>
                </a>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AboutProps {
    styles: StyleSet,
    about: About,
    name: AttrValue,
}

#[function_component(AboutSection)]
fn about_section(props: &AboutProps) -> Html {
    let styles = props.styles;
    let about = &props.about;

    let summary_card = |title: &'static str, lines: &[String]| {
        html! {
            <div class={classes!("p-6", "rounded-xl", styles.card_bg)}>
                <h3 class={classes!("text-xl", "font-bold", "mb-2", styles.heading)}>{title}</h3>
                { for lines.iter().map(|line| html! { <p class={styles.muted}>{line.clone()}</p> }) }
            </div>
        }
    };

    html! {
        <section id={SectionId::About.as_str()} class="min-h-screen py-20 px-6 md:px-20">
            <div class="max-w-6xl mx-auto">
                <SectionHeading styles={styles} eyebrow="Get To Know More" title="About Me" />
                <div class="grid md:grid-cols-2 gap-10 items-center">
                    <div class="relative">
                        <div class="rounded-2xl overflow-hidden">
                            <img src={about.photo.clone()} alt={props.name.clone()} class="w-full h-auto" />
                        </div>
                        <div class={classes!("absolute", "-bottom-6", "-right-6", "p-4", "rounded-xl", "shadow-lg", styles.accent_bg, styles.button_text)}>
                            <span class="text-lg font-bold">{about.years_badge.clone()}</span>
                        </div>
                    </div>
                    <div>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 mb-8">
                            {summary_card("Experience", about.experience.as_slice())}
                            {summary_card("Education", about.education.as_slice())}
                        </div>
                        <p class={classes!(styles.subheading, "leading-relaxed")}>{about.bio.clone()}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillBarProps {
    styles: StyleSet,
    skill: Skill,
}

#[function_component(SkillBar)]
fn skill_bar(props: &SkillBarProps) -> Html {
    let level = props.skill.level;
    let width = format!("width: {}%;", level.percentage());

    html! {
        <div class="mb-4">
            <div class="flex justify-between mb-1">
                <span class={classes!("font-medium", props.styles.heading)}>{props.skill.name.clone()}</span>
                <span class={props.styles.accent}>{level.as_str()}</span>
            </div>
            <div class="w-full h-2.5 bg-gray-700 rounded-full">
                <div class={classes!("h-2.5", "rounded-full", props.styles.accent_bg)} style={width}></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ExperienceProps {
    styles: StyleSet,
    groups: Vec<SkillGroup>,
}

#[function_component(ExperienceSection)]
fn experience_section(props: &ExperienceProps) -> Html {
    let styles = props.styles;

    html! {
        <section id={SectionId::Experience.as_str()} class="min-h-screen py-20 px-6 md:px-20">
            <div class="max-w-6xl mx-auto">
                <SectionHeading styles={styles} eyebrow="Explore My" title="Experience" />
                <div class="grid md:grid-cols-2 gap-10">
                    { for props.groups.iter().map(|group| html! {
                        <div key={group.title.clone()} class={classes!("p-8", "rounded-xl", "border", styles.card_bg, styles.card_border)}>
                            <h3 class={classes!("text-2xl", "font-bold", "mb-6", "text-center", styles.heading)}>{group.title.clone()}</h3>
                            { for group.skills.iter().map(|skill| html! {
                                <SkillBar key={skill.name.clone()} styles={styles} skill={skill.clone()} />
                            }) }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectsProps {
    styles: StyleSet,
    projects: Vec<Project>,
}

#[function_component(ProjectsSection)]
fn projects_section(props: &ProjectsProps) -> Html {
    let styles = props.styles;

    html! {
        <section id={SectionId::Projects.as_str()} class="min-h-screen py-20 px-6 md:px-20">
            <div class="max-w-6xl mx-auto">
                <SectionHeading styles={styles} eyebrow="Browse My" title="Projects" />
                <div class="grid md:grid-cols-2 gap-8">
                    { for props.projects.iter().map(|project| html! {
                        <article key={project.title.clone()} class={classes!("rounded-xl", "overflow-hidden", "border", styles.card_bg, styles.card_border)}>
                            <div class="h-48 overflow-hidden">
                                <img src={project.image.clone()} alt={project.title.clone()} class="w-full h-full object-cover" loading="lazy" />
                            </div>
                            <div class="p-6">
                                <h3 class={classes!("text-xl", "font-bold", "mb-3", styles.heading)}>{project.title.clone()}</h3>
                                <p class={classes!("mb-4", styles.subheading)}>{project.description.clone()}</p>
                                <h4 class={classes!("text-sm", "font-semibold", "mb-1", styles.accent)}>{"Skills:"}</h4>
                                <p class={classes!("text-sm", styles.muted)}>{project.skills.clone()}</p>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CertificatesProps {
    styles: StyleSet,
    certificates: Vec<Certificate>,
}

#[function_component(CertificatesSection)]
fn certificates_section(props: &CertificatesProps) -> Html {
    let styles = props.styles;

    html! {
        <section id={SectionId::Certificates.as_str()} class="min-h-screen py-20 px-6 md:px-20">
            <div class="max-w-6xl mx-auto">
                <SectionHeading styles={styles} eyebrow="View My" title="Certificates" />
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    { for props.certificates.iter().map(|cert| html! {
                        <article key={cert.name.clone()} class={classes!("rounded-xl", "overflow-hidden", "border", styles.card_bg, styles.card_border)}>
                            <div class="h-40 overflow-hidden">
                                <img src={cert.preview.clone()} alt={cert.name.clone()} class="w-full h-full object-cover" loading="lazy" />
                            </div>
                            <div class="p-4">
                                <h3 class={classes!("font-medium", "truncate", styles.heading)}>{cert.name.clone()}</h3>
                                <p class={classes!("text-sm", styles.muted)}>{cert.date.clone()}</p>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialsProps {
    styles: StyleSet,
    testimonials: Vec<Testimonial>,
}

#[function_component(TestimonialsSection)]
fn testimonials_section(props: &TestimonialsProps) -> Html {
    let styles = props.styles;

    html! {
        <section id={SectionId::Testimonials.as_str()} class="py-20 px-6 md:px-20">
            <div class="max-w-6xl mx-auto">
                <SectionHeading styles={styles} eyebrow="What People Say" title="Testimonials" />
                <div class="grid md:grid-cols-3 gap-8">
                    { for props.testimonials.iter().map(|testimonial| html! {
                        <figure key={testimonial.name.clone()} class={classes!("p-6", "rounded-xl", "border", styles.card_bg, styles.card_border)}>
                            <blockquote class={classes!("mb-6", "italic", styles.subheading)}>
                                {format!("\u{201c}{}\u{201d}", testimonial.text)}
                            </blockquote>
                            <figcaption class="flex items-center gap-4">
                                <img src={testimonial.image.clone()} alt={testimonial.name.clone()} class="w-12 h-12 rounded-full object-cover" loading="lazy" />
                                <div>
                                    <p class={classes!("font-bold", styles.heading)}>{testimonial.name.clone()}</p>
                                    <p class={classes!("text-sm", styles.accent)}>{testimonial.position.clone()}</p>
                                </div>
                            </figcaption>
                        </figure>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ContactProps {
    styles: StyleSet,
    contact: ContactDetails,
    links: SocialLinks,
}

#[function_component(ContactSection)]
fn contact_section(props: &ContactProps) -> Html {
    let styles = props.styles;
    let contact = &props.contact;
    let input_class = classes!("w-full", "px-4", "py-3", "rounded-lg", "border", styles.input_bg);
    let label_class = classes!("block", "mb-2", styles.heading);

    html! {
        <section id={SectionId::Contact.as_str()} class="min-h-screen py-20 px-6 md:px-20">
            <div class="max-w-6xl mx-auto">
                <SectionHeading styles={styles} eyebrow="Get In Touch" title="Contact Me" />
                <div class="grid md:grid-cols-2 gap-10">
                    <div>
                        <h3 class={classes!("text-2xl", "font-bold", "mb-6", styles.heading)}>{"Let's Talk"}</h3>
                        <p class={classes!("mb-8", styles.subheading)}>{contact.blurb.clone()}</p>
                        <div class="space-y-6">
                            <div class={classes!("p-4", "rounded-xl", styles.card_bg)}>
                                <h4 class={classes!("text-sm", styles.muted)}>{"Email"}</h4>
                                <a href={contact.mailto()} class={styles.heading}>{contact.email.clone()}</a>
                            </div>
                            <div class={classes!("p-4", "rounded-xl", styles.card_bg)}>
                                <h4 class={classes!("text-sm", styles.muted)}>{"LinkedIn"}</h4>
                                <ExternalLink href={props.links.linkedin.clone()} class={classes!(styles.heading)}>
                                    {props.links.linkedin_display.clone()}
                                </ExternalLink>
                            </div>
                        </div>
                    </div>

                    <div class={classes!("p-8", "rounded-xl", styles.card_bg)}>
                        <h3 class={classes!("text-xl", "font-bold", "mb-6", styles.heading)}>{"Send Me a Message"}</h3>
                        <form class="space-y-4" action={contact.mailto()} method="post" enctype="text/plain">
                            <div>
                                <label for="name" class={label_class.clone()}>{"Your Name"}</label>
                                <input type="text" id="name" name="name" placeholder="John Doe" required=true class={input_class.clone()} />
                            </div>
                            <div>
                                <label for="email" class={label_class.clone()}>{"Your Email"}</label>
                                <input type="email" id="email" name="email" placeholder="john@example.com" required=true class={input_class.clone()} />
                            </div>
                            <div>
                                <label for="message" class={label_class}>{"Your Message"}</label>
                                <textarea id="message" name="message" rows="4" placeholder="Hello, I'd like to talk about..." required=true class={input_class} />
                            </div>
                            <button type="submit" class={classes!("w-full", "px-6", "py-3", "rounded-lg", "transition-colors", styles.button_bg, styles.button_text)}>
                                {"Send Message"}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    styles: StyleSet,
    profile: Profile,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    let styles = props.styles;

    html! {
        <footer class={classes!("py-10", "px-6", "md:px-20", styles.footer_bg)}>
            <div class="max-w-6xl mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <Brand
                        styles={styles}
                        first_name={props.profile.first_name.clone()}
                        last_name={props.profile.last_name.clone()}
                        class="text-2xl"
                    />
                    <ul class="flex gap-6">
                        { for SectionId::FOOTER.into_iter().map(|id| html! {
                            <li key={id.as_str()}>
                                <a href={id.anchor()} class={classes!("transition-colors", styles.muted)}>{id.title()}</a>
                            </li>
                        }) }
                    </ul>
                    <SocialRow styles={styles} links={props.profile.links.clone()} size="w-8 h-8" />
                </div>
                <div class={classes!("mt-8", "pt-8", "border-t", "text-center", "text-sm", styles.card_border, styles.muted)}>
                    <p>{format!("Copyright © {} {}. All Rights Reserved.", current_year(), props.profile.full_name())}</p>
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
    content: Rc<SiteContent>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let theme = use_reducer({
        let initial = props.config.default_theme;
        move || ThemeManager::new(initial)
    });
    let tracker = use_reducer({
        let threshold = props.config.section_threshold;
        move || SectionTracker::new(threshold)
    });
    let menu = use_reducer(MobileMenu::default);

    {
        let dispatcher = tracker.dispatcher();
        let threshold = tracker.threshold();
        use_effect_with((), move |_| {
            let observer = SectionObserver::register(threshold, dispatcher);
            move || drop(observer)
        });
    }

    let on_theme = {
        let theme = theme.dispatcher();
        Callback::from(move |next: Theme| theme.dispatch(next))
    };

    let on_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |action: MenuAction| menu.dispatch(action))
    };

    let styles = theme.styles();
    let content = &props.content;
    let profile = content.profile.clone();

    html! {
        <div class={classes!("min-h-screen", styles.background, styles.text)}>
            <ThemeSwitcher current={theme.theme()} styles={styles} on_select={on_theme} />
            <DesktopNav styles={styles} profile={profile.clone()} active={tracker.active()} />
            <MobileNav styles={styles} profile={profile.clone()} menu={*menu} on_menu={on_menu} />

            <main>
                <Hero styles={styles} profile={profile.clone()} timings={props.config.typewriter} />
                <AboutSection styles={styles} about={content.about.clone()} name={profile.full_name()} />
                <ExperienceSection styles={styles} groups={content.skill_groups.clone()} />
                <ProjectsSection styles={styles} projects={content.projects.clone()} />
                <CertificatesSection styles={styles} certificates={content.certificates.clone()} />
                <TestimonialsSection styles={styles} testimonials={content.testimonials.clone()} />
                <ContactSection styles={styles} contact={content.contact.clone()} links={profile.links.clone()} />
            </main>

            <Footer styles={styles} profile={profile} />
        </div>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
        .expect("missing #app mount point");

    let config = SiteConfig::from_lookup(|key| root.get_attribute(&format!("data-{key}")));
    logging::init(config.log_level);

    let content = match SiteContent::embedded() {
        Ok(content) => content,
        Err(error) => {
            log_event(
                Level::Error,
                "content_load_failed",
                serde_json::json!({ "message": error.to_string() }),
            );
            SiteContent::default()
        }
    };

    log_event(
        Level::Info,
        "app_mounted",
        serde_json::json!({
            "default_theme": config.default_theme.as_str(),
            "section_threshold": config.section_threshold,
        }),
    );

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config,
            content: Rc::new(content),
        },
    )
    .render();
}
