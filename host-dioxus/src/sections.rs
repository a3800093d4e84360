//! # 页面分区模块
//!
//! 作品页的静态内容分区。所有滚动入场分区通过 [`Reveal`] 包装器注册，
//! 悬停交互元素通过 [`Interactive`] 包装器注册，分区本身不持有效果逻辑。

use dioxus::prelude::*;

use crate::effects::{Interactive, PageEffects, Reveal};

/// 经历条目
struct Achievement {
    year: &'static str,
    title: &'static str,
    description: &'static str,
    link: Option<&'static str>,
}

const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        year: "2025",
        title: "Storage Engine Contributor",
        description: "Contributed compaction scheduling improvements to an open source \
                      log-structured storage engine, cutting write stalls on mixed workloads.",
        link: Some("https://example.com/storage-engine"),
    },
    Achievement {
        year: "2025",
        title: "Platform Engineer at Meridian Labs",
        description: "Building internal data pipelines and observability tooling. \
                      Owning reliability of the ingestion tier end to end.",
        link: None,
    },
    Achievement {
        year: "2024",
        title: "Systems Programming Mentor",
        description: "Running a weekly study group on operating systems and network \
                      programming for early-career engineers.",
        link: None,
    },
    Achievement {
        year: "2023",
        title: "Distributed Systems Coursework",
        description: "Completed graduate-level coursework on consensus, replication, \
                      and fault tolerance, with a replicated key-value store as capstone.",
        link: Some("https://example.com/coursework"),
    },
];

/// 顶部导航：滚动超过阈值后进入收紧形态
#[component]
pub fn Navigation() -> Element {
    let fx = use_context::<PageEffects>();

    rsx! {
        nav {
            class: if fx.is_scrolled() { "scrolled" },
            div { class: "logo", "Jordan Hale" }
            div { class: "nav-links",
                Interactive { a { href: "#about", "About" } }
                Interactive { a { href: "#work", "Work" } }
                Interactive { a { href: "#projects", "Projects" } }
                Interactive { a { href: "#contact", "Contact" } }
            }
        }
    }
}

/// 首屏：挂载后立即入场
#[component]
pub fn Hero() -> Element {
    rsx! {
        Reveal { class: "hero",
            div { class: "hero-content",
                p { class: "hero-label", "Systems Engineer" }
                h1 {
                    "Building reliable"
                    br {}
                    "infrastructure with"
                    br {}
                    span { class: "emphasis", "care." }
                }
                p { class: "hero-description",
                    "Platform engineer focused on storage, data pipelines, and the \
                     unglamorous work that keeps production systems honest."
                }
                div { class: "cta-group",
                    Interactive {
                        a { href: "#work", class: "cta-primary", "View Work" }
                    }
                    Interactive {
                        a { href: "mailto:hello@example.com", class: "cta-secondary", "Get In Touch" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        Reveal { id: "about", class: "about-section",
            div { class: "container",
                div { class: "about-grid",
                    div { class: "about-content",
                        span { class: "section-label", "About Me" }
                        h2 { class: "section-title",
                            "Operating at the intersection of data, infrastructure, and real impact."
                        }
                    }
                    div { class: "about-text",
                        p {
                            "I work on the plumbing: ingestion tiers, storage engines, and the \
                             pipelines between them. Most of my time goes into making systems \
                             boring in the best sense of the word."
                        }
                        p {
                            "My focus is on reliability. Validated pipelines, clear metric \
                             definitions, and reproducible results beat clever code that \
                             nobody can operate at three in the morning."
                        }
                    }
                }
                div { class: "education-cards",
                    div { class: "edu-card",
                        h3 { "Carver Institute of Technology" }
                        p { class: "edu-degree", "B.S. Computer Science" }
                        p { class: "edu-gpa", "GPA: 3.7 / 4.0" }
                    }
                    div { class: "edu-card",
                        h3 { "Northgate University" }
                        p { class: "edu-degree", "M.S. Distributed Systems" }
                        p { class: "edu-gpa", "GPA: 3.8 / 4.0" }
                    }
                }
            }
        }
    }
}

/// 经历分区：数据驱动渲染
#[component]
pub fn Work() -> Element {
    rsx! {
        Reveal { id: "work", class: "work-section",
            div { class: "container",
                span { class: "section-label", "Experience & Recognition" }
                h2 { class: "section-title", "Selected Work" }
                div { class: "work-list",
                    for item in ACHIEVEMENTS {
                        div { class: "work-item",
                            div { class: "work-year", {item.year} }
                            div { class: "work-content",
                                h3 { {item.title} }
                                p { {item.description} }
                                if let Some(link) = item.link {
                                    Interactive {
                                        a {
                                            href: link,
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            class: "work-link",
                                            "View Details →"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        Reveal { id: "projects", class: "projects-section",
            div { class: "container",
                span { class: "section-label", "Portfolio" }
                h2 { class: "section-title", "Featured Projects" }
                div { class: "projects-grid",
                    div { class: "project-card",
                        div { class: "project-number", "01" }
                        h3 { "Replicated Key-Value Store" }
                        p {
                            "Raft-based key-value store with snapshot shipping and \
                             read leases, built to survive deliberately hostile fault \
                             injection."
                        }
                        div { class: "project-tech",
                            span { "Consensus" }
                            span { "Storage" }
                            span { "Fault Injection" }
                        }
                    }
                    div { class: "project-card",
                        div { class: "project-number", "02" }
                        h3 { "Streaming Metrics Pipeline" }
                        p {
                            "Backpressure-aware ingestion pipeline turning raw event \
                             streams into queryable, pre-aggregated metric series."
                        }
                        div { class: "project-tech",
                            span { "Streaming" }
                            span { "Aggregation" }
                            span { "Backpressure" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        Reveal { class: "skills-section",
            div { class: "container",
                div { class: "skills-grid",
                    div { class: "skill-col",
                        h3 { "Technical Stack" }
                        ul {
                            li { "Rust, Go, SQL" }
                            li { "Tokio, async services" }
                            li { "Postgres, object storage" }
                            li { "Kafka, stream processing" }
                            li { "Git, Docker, Kubernetes" }
                        }
                    }
                    div { class: "skill-col",
                        h3 { "Focus Areas" }
                        ul {
                            li { "Storage & Data Pipelines" }
                            li { "Distributed Systems" }
                            li { "Observability & Metrics" }
                            li { "Performance Engineering" }
                            li { "Operational Reliability" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        Reveal { id: "contact", class: "contact-section",
            div { class: "container",
                div { class: "contact-content",
                    h2 { "Got an idea?" }
                    p { class: "contact-tagline", "Think it. Build it. Ship it." }
                    div { class: "contact-links",
                        Interactive {
                            a { href: "mailto:hello@example.com", class: "contact-btn", "Email Me" }
                        }
                    }
                    div { class: "social-links",
                        Interactive {
                            a {
                                href: "https://example.com/linkedin",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "LinkedIn"
                            }
                        }
                        Interactive {
                            a {
                                href: "https://example.com/github",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "GitHub"
                            }
                        }
                        Interactive {
                            a {
                                href: "https://example.com/blog",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Blog"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            div { class: "container",
                div { class: "footer-content",
                    p { "© 2026 Jordan Hale" }
                    p { "Open to infrastructure and platform engineering roles." }
                }
            }
        }
    }
}
