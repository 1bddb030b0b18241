//! The standard block renderers.
//!
//! Renderers are intentionally dumb: the resolver already ran the
//! precedence chain, so nothing here falls back, localizes, or reads the
//! document. Empty collections render empty containers.

use crate::node::RenderNode;
use crate::registry::BlockRenderer;
use crate::theme::Theme;
use pagestudio_resolver::{
    AgendaDay, BlockProps, LinkProps, SessionProps, SpeakerProps, TicketProps,
};

pub struct HeroRenderer;

impl BlockRenderer for HeroRenderer {
    fn render(&self, props: &BlockProps, theme: &Theme) -> Option<RenderNode> {
        let BlockProps::Hero(props) = props else {
            return None;
        };

        let mut section = RenderNode::element("section").with_class("block-hero");
        if let Some(url) = &props.background_image_url {
            section = section.with_attr("style", format!("background-image: url({})", url));
        }

        let mut meta = RenderNode::element("div").with_class("hero-meta");
        for value in [&props.date_label, &props.time_label, &props.location] {
            if !value.is_empty() {
                meta = meta.with_child(RenderNode::labeled("span", value));
            }
        }

        Some(
            section
                .with_child(RenderNode::labeled("h1", &props.title))
                .with_child(RenderNode::labeled("p", &props.tagline))
                .with_child(meta)
                .with_child(
                    RenderNode::labeled("a", &props.cta_label)
                        .with_class("hero-cta")
                        .with_attr("href", "#tickets")
                        .with_attr("style", theme.button_style()),
                ),
        )
    }
}

pub struct AboutRenderer;

impl BlockRenderer for AboutRenderer {
    fn render(&self, props: &BlockProps, _theme: &Theme) -> Option<RenderNode> {
        let BlockProps::About(props) = props else {
            return None;
        };

        let features = RenderNode::element("ul").with_class("about-features").with_children(
            props
                .features
                .iter()
                .map(|feature| RenderNode::labeled("li", feature)),
        );

        Some(
            RenderNode::element("section")
                .with_class("block-about")
                .with_child(RenderNode::labeled("h2", &props.heading))
                .with_child(RenderNode::labeled("p", &props.body))
                .with_child(features),
        )
    }
}

pub struct AgendaRenderer;

impl AgendaRenderer {
    fn day(day: &AgendaDay) -> RenderNode {
        RenderNode::element("div")
            .with_class("agenda-day")
            .with_child(RenderNode::labeled("h3", &day.label))
            .with_child(
                RenderNode::element("ul")
                    .with_children(day.sessions.iter().map(Self::session)),
            )
    }

    fn session(session: &SessionProps) -> RenderNode {
        let mut item = RenderNode::element("li").with_class("agenda-session");
        if !session.time_label.is_empty() {
            item = item.with_child(
                RenderNode::labeled("span", &session.time_label).with_class("session-time"),
            );
        }
        item = item
            .with_child(RenderNode::labeled("span", &session.title).with_class("session-title"))
            .with_child(
                RenderNode::labeled("span", &session.duration_label)
                    .with_class("session-duration"),
            );
        if !session.speaker.is_empty() {
            item = item.with_child(
                RenderNode::labeled("span", &session.speaker).with_class("session-speaker"),
            );
        }
        if !session.location.is_empty() {
            item = item.with_child(
                RenderNode::labeled("span", &session.location).with_class("session-location"),
            );
        }
        item
    }
}

impl BlockRenderer for AgendaRenderer {
    fn render(&self, props: &BlockProps, _theme: &Theme) -> Option<RenderNode> {
        let BlockProps::Agenda(props) = props else {
            return None;
        };

        Some(
            RenderNode::element("section")
                .with_class("block-agenda")
                .with_child(RenderNode::labeled("h2", &props.heading))
                .with_children(props.days.iter().map(Self::day)),
        )
    }
}

pub struct SpeakersRenderer;

impl SpeakersRenderer {
    fn speaker(speaker: &SpeakerProps) -> RenderNode {
        let avatar = match &speaker.photo_url {
            Some(url) => RenderNode::element("img")
                .with_class("speaker-photo")
                .with_attr("src", url)
                .with_attr("alt", &speaker.name),
            None => RenderNode::labeled("span", &speaker.initials).with_class("speaker-initials"),
        };

        let mut card = RenderNode::element("li")
            .with_class("speaker-card")
            .with_child(avatar)
            .with_child(RenderNode::labeled("span", &speaker.name).with_class("speaker-name"));

        let role_company = match (speaker.role.is_empty(), speaker.company.is_empty()) {
            (false, false) => format!("{}, {}", speaker.role, speaker.company),
            (false, true) => speaker.role.clone(),
            (true, false) => speaker.company.clone(),
            (true, true) => String::new(),
        };
        if !role_company.is_empty() {
            card = card
                .with_child(RenderNode::labeled("span", role_company).with_class("speaker-role"));
        }
        card
    }
}

impl BlockRenderer for SpeakersRenderer {
    fn render(&self, props: &BlockProps, _theme: &Theme) -> Option<RenderNode> {
        let BlockProps::Speakers(props) = props else {
            return None;
        };

        Some(
            RenderNode::element("section")
                .with_class("block-speakers")
                .with_child(RenderNode::labeled("h2", &props.heading))
                .with_child(
                    RenderNode::element("ul")
                        .with_class("speaker-grid")
                        .with_children(props.speakers.iter().map(Self::speaker)),
                ),
        )
    }
}

pub struct TicketsRenderer;

impl TicketsRenderer {
    fn ticket(ticket: &TicketProps, theme: &Theme) -> RenderNode {
        let class = if ticket.popular {
            "ticket-card popular"
        } else {
            "ticket-card"
        };

        let mut card = RenderNode::element("article")
            .with_class(class)
            .with_child(RenderNode::labeled("h3", &ticket.name))
            .with_child(RenderNode::labeled("div", &ticket.price_label).with_class("ticket-price"));

        if !ticket.description.is_empty() {
            card = card.with_child(RenderNode::labeled("p", &ticket.description));
        }
        if !ticket.perks.is_empty() {
            card = card.with_child(
                RenderNode::element("ul").with_class("ticket-perks").with_children(
                    ticket.perks.iter().map(|perk| RenderNode::labeled("li", perk)),
                ),
            );
        }

        card.with_child(
            RenderNode::labeled("button", "Select")
                .with_attr("style", theme.button_style()),
        )
    }
}

impl BlockRenderer for TicketsRenderer {
    fn render(&self, props: &BlockProps, theme: &Theme) -> Option<RenderNode> {
        let BlockProps::Tickets(props) = props else {
            return None;
        };

        Some(
            RenderNode::element("section")
                .with_class("block-tickets")
                .with_child(RenderNode::labeled("h2", &props.heading))
                .with_child(
                    RenderNode::element("div").with_class("ticket-grid").with_children(
                        props.tickets.iter().map(|t| Self::ticket(t, theme)),
                    ),
                ),
        )
    }
}

pub struct FooterRenderer;

impl FooterRenderer {
    fn nav(class: &str, links: &[LinkProps]) -> RenderNode {
        RenderNode::element("nav").with_class(class).with_children(
            links
                .iter()
                .map(|link| RenderNode::labeled("a", &link.label).with_attr("href", &link.url)),
        )
    }
}

impl BlockRenderer for FooterRenderer {
    fn render(&self, props: &BlockProps, theme: &Theme) -> Option<RenderNode> {
        let BlockProps::Footer(props) = props else {
            return None;
        };

        let mut footer = RenderNode::element("footer").with_class("block-footer");
        if let Some(url) = &theme.logo_url {
            footer = footer.with_child(
                RenderNode::element("img")
                    .with_class("footer-logo")
                    .with_attr("src", url)
                    .with_attr("alt", &props.event_name),
            );
        }

        Some(
            footer
                .with_child(
                    RenderNode::labeled("span", &props.event_name).with_class("footer-name"),
                )
                .with_child(Self::nav("footer-links", &props.quick_links))
                .with_child(Self::nav("footer-social", &props.social_links))
                .with_child(RenderNode::labeled("small", &props.copyright)),
        )
    }
}
