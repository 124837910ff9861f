//! Demo dataset loaded at startup when seeding is enabled.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use super::Repository;
use crate::models::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn login(y: i32, m: u32, d: u32, h: u32, min: u32) -> Option<NaiveDateTime> {
    date(y, m, d).and_hms_opt(h, min, 0)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

/// Populate every store with the demo records.
pub async fn seed_demo(repo: &Repository) {
    for record in projects() {
        repo.projects.insert(record).await;
    }
    for record in leads() {
        repo.leads.insert(record).await;
    }
    for record in blog_posts() {
        repo.blog_posts.insert(record).await;
    }
    for record in team_members() {
        repo.team_members.insert(record).await;
    }
    for record in testimonials() {
        repo.testimonials.insert(record).await;
    }
    for record in pricing_packages() {
        repo.pricing_packages.insert(record).await;
    }
    for record in faqs() {
        repo.faqs.insert(record).await;
    }
    for record in devis() {
        repo.devis.insert(record).await;
    }
    for record in subscribers() {
        repo.subscribers.insert(record).await;
    }
    for record in users() {
        repo.users.insert(record).await;
    }
    repo.home_content.set(home_page_content()).await;
    repo.settings.set(site_settings()).await;

    info!("Demo dataset loaded");
}

fn project(
    id: &str,
    title: &str,
    client: &str,
    division: Division,
    tags: &[&str],
    description: &str,
    created_at: NaiveDate,
    featured: bool,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        client: client.to_string(),
        division,
        tags: strings(tags),
        description: description.to_string(),
        image_url: placeholder_image(id.parse().unwrap_or(0)),
        created_at,
        featured,
        full_description: None,
        additional_images: Vec::new(),
        video_url: None,
        technologies: Vec::new(),
        results: Vec::new(),
        slug: slugify(title),
        meta_title: None,
        meta_description: None,
    }
}

fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "Neon Fintech Platform",
            "NeoBank Corp",
            Division::Tech,
            &["React", "Node.js", "Finance"],
            "A cutting-edge banking dashboard with real-time analytics.",
            date(2023, 10, 15),
            true,
        ),
        project(
            "2",
            "Luxury Fashion Rebrand",
            "Vogue Styles",
            Division::Brand,
            &["Identity", "Strategy", "Design"],
            "Complete visual identity overhaul for a legacy fashion house.",
            date(2023, 11, 2),
            true,
        ),
        project(
            "3",
            "Immersive 3D Experience",
            "AutoFuture",
            Division::Studio,
            &["WebGL", "3D", "Three.js"],
            "Interactive showroom for the new electric vehicle lineup.",
            date(2023, 11, 20),
            false,
        ),
        project(
            "4",
            "HealthCare App",
            "MediCare",
            Division::Tech,
            &["Mobile", "React Native", "HIPAA"],
            "Patient management system with secure messaging.",
            date(2023, 12, 5),
            false,
        ),
    ]
}

fn leads() -> Vec<Lead> {
    vec![
        Lead {
            id: "101".into(),
            name: "Alice Johnson".into(),
            email: "alice@startuplab.com".into(),
            phone: some("+1 (555) 123-4567"),
            company: some("StartupLab Inc."),
            division: Division::Tech,
            status: LeadStatus::New,
            budget: some("$50k - $100k"),
            message: "Looking for a full-stack team to build our MVP. We need a React frontend \
                      and Node.js backend. The timeline is tight, looking to launch in 3 months."
                .into(),
            event_date: None,
            received_at: date(2023, 12, 1),
            internal_notes: String::new(),
        },
        Lead {
            id: "102".into(),
            name: "Bob Smith".into(),
            email: "bob@agency.com".into(),
            phone: some("+1 (555) 987-6543"),
            company: some("Creative Agency"),
            division: Division::Studio,
            status: LeadStatus::Contacted,
            budget: some("$20k - $50k"),
            message: "Need a 3D explainer video for our product launch. We have the script \
                      ready, need visual magic."
                .into(),
            event_date: Some(date(2024, 3, 15)),
            received_at: date(2023, 11, 28),
            internal_notes: "Contacted on Nov 29. Sent initial portfolio. Waiting for script review."
                .into(),
        },
        Lead {
            id: "103".into(),
            name: "Carol White".into(),
            email: "carol@retail.co".into(),
            phone: None,
            company: None,
            division: Division::Brand,
            status: LeadStatus::Closed,
            budget: some("$10k - $20k"),
            message: "Rebranding our physical stores. Need signage and wayfinding design.".into(),
            event_date: None,
            received_at: date(2023, 11, 15),
            internal_notes: "Project declined due to budget constraints.".into(),
        },
    ]
}

fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".into(),
            title: "The Future of Web Design in 2024".into(),
            slug: "future-web-design-2024".into(),
            excerpt: "Explore the emerging trends that will shape the digital landscape in the \
                      coming year, from AI-driven layouts to immersive 3D experiences."
                .into(),
            content: "Full content of the blog post goes here...".into(),
            category: BlogCategory::Design,
            image_url: placeholder_image(10),
            status: PostStatus::Published,
            published_date: date(2023, 12, 10),
            reading_time: "5 min".into(),
            featured: true,
            author: "Sarah Jenkins".into(),
            tags: strings(&["UI/UX", "Trends", "Web Design"]),
            meta_title: some("Web Design Trends 2024"),
            meta_description: some("A comprehensive look at 2024 web design trends."),
            meta_keywords: Vec::new(),
        },
        BlogPost {
            id: "2".into(),
            title: "Optimizing React Performance".into(),
            slug: "optimizing-react-performance".into(),
            excerpt: "A deep dive into memoization, lazy loading, and other techniques to speed \
                      up your React applications."
                .into(),
            content: "Technical content about React...".into(),
            category: BlogCategory::Engineering,
            image_url: placeholder_image(11),
            status: PostStatus::Draft,
            published_date: date(2023, 12, 15),
            reading_time: "8 min".into(),
            featured: false,
            author: "Mike Chen".into(),
            tags: strings(&["React", "Performance", "JavaScript"]),
            meta_title: some("React Performance Guide"),
            meta_description: some("Learn how to make your React apps faster."),
            meta_keywords: Vec::new(),
        },
        BlogPost {
            id: "3".into(),
            title: "Brand Identity vs. Brand Image".into(),
            slug: "brand-identity-vs-image".into(),
            excerpt: "Understanding the crucial differences between how you want to be \
                      perceived and how you actually are perceived."
                .into(),
            content: "Branding content...".into(),
            category: BlogCategory::Branding,
            image_url: placeholder_image(12),
            status: PostStatus::Published,
            published_date: date(2023, 11, 20),
            reading_time: "4 min".into(),
            featured: false,
            author: "Emma Wilson".into(),
            tags: strings(&["Branding", "Marketing", "Strategy"]),
            meta_title: None,
            meta_description: None,
            meta_keywords: Vec::new(),
        },
    ]
}

fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "1".into(),
            name: "Alex Rivera".into(),
            role: "Creative Director".into(),
            division: Division::Studio,
            bio: "Award-winning designer with 10+ years of experience in digital art, motion \
                  graphics, and immersive branding experiences."
                .into(),
            photo_url: "https://picsum.photos/200/200?random=20".into(),
            expertise: strings(&["Art Direction", "3D Design", "Brand Strategy", "Motion"]),
            linkedin_url: some("https://linkedin.com/in/alexrivera"),
            email: some("alex@aureus.agency"),
            twitter_url: None,
            featured: true,
            display_order: 1,
        },
        TeamMember {
            id: "2".into(),
            name: "Sarah Chen".into(),
            role: "Lead Architect".into(),
            division: Division::Tech,
            bio: "Full-stack wizard specializing in scalable cloud architectures, React \
                  ecosystems, and AI integration."
                .into(),
            photo_url: "https://picsum.photos/200/200?random=21".into(),
            expertise: strings(&["React", "Node.js", "AWS", "System Design"]),
            linkedin_url: None,
            email: some("sarah@aureus.agency"),
            twitter_url: None,
            featured: true,
            display_order: 2,
        },
        TeamMember {
            id: "3".into(),
            name: "Marcus Johnson".into(),
            role: "Brand Strategist".into(),
            division: Division::Brand,
            bio: "Helping companies find their voice in a crowded marketplace through \
                  data-driven storytelling and visual identity."
                .into(),
            photo_url: "https://picsum.photos/200/200?random=22".into(),
            expertise: strings(&["Marketing", "Copywriting", "Social Media", "PR"]),
            linkedin_url: None,
            email: None,
            twitter_url: None,
            featured: false,
            display_order: 3,
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".into(),
            name: "Eleanor Fant".into(),
            role: "VP of Marketing".into(),
            company: "Nexus Tech".into(),
            company_logo_url: some("https://picsum.photos/100/100?random=30"),
            photo_url: some("https://picsum.photos/200/200?random=30"),
            content: "Aureus Digital transformed our online presence completely. The Tech \
                      division delivered a flawless platform that has increased our user \
                      engagement by 200%. Truly exceptional work."
                .into(),
            rating: 5,
            division: Division::Tech,
            video_url: None,
            created_at: date(2023, 11, 10),
        },
        Testimonial {
            id: "2".into(),
            name: "David Wright".into(),
            role: "Founder".into(),
            company: "Artisan Coffee".into(),
            company_logo_url: None,
            photo_url: some("https://picsum.photos/200/200?random=31"),
            content: "The branding team really understood our essence. They created an identity \
                      that feels authentic yet modern. We receive compliments on our packaging \
                      daily."
                .into(),
            rating: 5,
            division: Division::Brand,
            video_url: None,
            created_at: date(2023, 10, 5),
        },
        Testimonial {
            id: "3".into(),
            name: "Sophia Li".into(),
            role: "Product Manager".into(),
            company: "FutureCars".into(),
            company_logo_url: some("https://picsum.photos/100/100?random=32"),
            photo_url: None,
            content: "The 3D showroom experience is mind-blowing. It works smoothly on all \
                      devices and has helped our pre-sales significantly."
                .into(),
            rating: 4,
            division: Division::Studio,
            video_url: some("https://youtube.com"),
            created_at: date(2023, 12, 1),
        },
    ]
}

fn pricing_packages() -> Vec<PricingPackage> {
    vec![
        PricingPackage {
            id: "1".into(),
            title: "MVP Launchpad".into(),
            division: Division::Tech,
            price: "15,000€".into(),
            price_note: some("Starting price"),
            description: "Perfect for startups looking to get their product to market quickly \
                          with a robust foundation."
                .into(),
            features: strings(&[
                "Core Feature Development",
                "React / Node.js Stack",
                "Basic Admin Dashboard",
                "3 Months Support",
                "Cloud Infrastructure Setup",
            ]),
            is_popular: true,
            is_highlight: false,
            delivery_time: some("6-8 Weeks"),
            revisions: some("2 Rounds"),
        },
        PricingPackage {
            id: "2".into(),
            title: "Brand Identity Suite".into(),
            division: Division::Brand,
            price: "5,000€".into(),
            price_note: some("One-time fee"),
            description: "A complete visual identity overhaul to position your brand for success."
                .into(),
            features: strings(&[
                "Logo Design (3 Concepts)",
                "Color Palette & Typography",
                "Brand Guidelines Book",
                "Social Media Assets",
                "Stationery Design",
            ]),
            is_popular: false,
            is_highlight: false,
            delivery_time: some("4 Weeks"),
            revisions: some("Unlimited"),
        },
        PricingPackage {
            id: "3".into(),
            title: "Immersive WebGL Experience".into(),
            division: Division::Studio,
            price: "25,000€".into(),
            price_note: some("Starting price"),
            description: "High-end 3D web experience for product showcases or luxury brands."
                .into(),
            features: strings(&[
                "Custom 3D Modeling",
                "Interactive WebGL Scene",
                "Performance Optimization",
                "Mobile Compatibility",
                "Sound Design Integration",
            ]),
            is_popular: false,
            is_highlight: true,
            delivery_time: some("10-12 Weeks"),
            revisions: some("3 Rounds"),
        },
    ]
}

fn faqs() -> Vec<Faq> {
    let faq = |id: &str, question: &str, answer: &str, category: FaqCategory, display_order: i32| Faq {
        id: id.into(),
        question: question.into(),
        answer: answer.into(),
        category,
        display_order,
    };

    vec![
        faq(
            "1",
            "What is your typical project timeline?",
            "Timelines vary depending on the scope of the project. A typical branding project \
             takes 4-6 weeks, while complex web applications can take 3-6 months.",
            FaqCategory::Process,
            1,
        ),
        faq(
            "2",
            "Do you offer ongoing support?",
            "Yes, we offer various maintenance and support packages to ensure your digital \
             products remain secure and up-to-date after launch.",
            FaqCategory::Services,
            2,
        ),
        faq(
            "3",
            "What are your payment terms?",
            "We typically require a 50% deposit to commence work, with the remaining balance \
             due upon project completion.",
            FaqCategory::Billing,
            3,
        ),
        faq(
            "4",
            "Can you work with our existing team?",
            "Absolutely. We often collaborate with internal marketing or dev teams to augment \
             their capabilities.",
            FaqCategory::Services,
            4,
        ),
    ]
}

fn devis() -> Vec<Devis> {
    vec![
        Devis {
            id: "DEVIS-2024-001".into(),
            client_name: "John Smith".into(),
            client_email: "john.smith@techflow.io".into(),
            company_name: some("TechFlow Solutions"),
            division: Division::Tech,
            project_description: "Custom CRM Development for internal sales team tracking.".into(),
            budget: "25,000€".into(),
            deadline: some("2024-06-01"),
            additional_requirements: some("Must integrate with existing AWS infrastructure."),
            generated_content: "# Proposal: Custom CRM Development\n\n## Scope\n- User \
                                Authentication\n- Dashboard Analytics\n\n## Investment\nTotal: \
                                25,000€"
                .into(),
            created_at: date(2024, 1, 15),
            status: DevisStatus::Sent,
        },
        Devis {
            id: "DEVIS-2024-002".into(),
            client_name: "Emily Davis".into(),
            client_email: "emily@boutiquefashion.com".into(),
            company_name: some("Boutique Fashion"),
            division: Division::Brand,
            project_description: "Full brand identity refresh including logo, color palette, \
                                  and social media assets."
                .into(),
            budget: "8,000€".into(),
            deadline: some("2024-03-01"),
            additional_requirements: None,
            generated_content: "# Proposal: Brand Identity Refresh\n\n## Deliverables\n- Logo \
                                Suite\n- Brand Guidelines\n\n## Investment\nTotal: 8,000€"
                .into(),
            created_at: date(2024, 2, 1),
            status: DevisStatus::Accepted,
        },
        Devis {
            id: "DEVIS-2024-003".into(),
            client_name: "Michael Brown".into(),
            client_email: "mike@autotrader.net".into(),
            company_name: None,
            division: Division::Studio,
            project_description: "3D Configurator for new car model launch.".into(),
            budget: "40,000€".into(),
            deadline: some("2024-08-01"),
            additional_requirements: some("High fidelity rendering required."),
            generated_content: "# Proposal: 3D Configurator\n\n## Technology\nWebGL, \
                                Three.js\n\n## Investment\nTotal: 40,000€"
                .into(),
            created_at: date(2024, 2, 10),
            status: DevisStatus::Draft,
        },
    ]
}

fn subscribers() -> Vec<Subscriber> {
    let subscriber = |id: &str,
                      email: &str,
                      source: &str,
                      subscribed_at: NaiveDate,
                      unsubscribed_at: Option<NaiveDate>| {
        Subscriber {
            id: id.into(),
            email: email.into(),
            source: source.into(),
            status: match unsubscribed_at {
                Some(_) => SubscriberStatus::Unsubscribed,
                None => SubscriberStatus::Active,
            },
            subscribed_at,
            unsubscribed_at,
        }
    };

    vec![
        subscriber("1", "user1@example.com", "Footer", date(2023, 11, 15), None),
        subscriber("2", "client.vip@company.com", "Modal", date(2023, 12, 1), None),
        subscriber(
            "3",
            "inactive@test.com",
            "Blog",
            date(2023, 10, 20),
            Some(date(2023, 12, 10)),
        ),
        subscriber("4", "new.lead@startup.io", "Contact Form", date(2024, 1, 5), None),
        subscriber("5", "designer@studio.art", "Footer", date(2024, 1, 12), None),
    ]
}

fn users() -> Vec<User> {
    let user = |id: &str,
                username: &str,
                role: UserRole,
                status: UserStatus,
                last_login: Option<NaiveDateTime>,
                created_at: NaiveDate| User {
        id: id.into(),
        username: username.into(),
        email: format!("{}@aureus.agency", username),
        role,
        status,
        last_login,
        created_at,
        avatar_url: avatar_for(username),
    };

    vec![
        user(
            "1",
            "admin",
            UserRole::SuperAdmin,
            UserStatus::Active,
            login(2024, 3, 10, 9, 30),
            date(2023, 1, 1),
        ),
        user(
            "2",
            "sarah",
            UserRole::Admin,
            UserStatus::Active,
            login(2024, 3, 9, 14, 20),
            date(2023, 2, 15),
        ),
        user(
            "3",
            "mike",
            UserRole::Editor,
            UserStatus::Inactive,
            login(2023, 12, 20, 11, 0),
            date(2023, 5, 10),
        ),
        user(
            "4",
            "viewer",
            UserRole::Viewer,
            UserStatus::Active,
            login(2024, 3, 11, 10, 15),
            date(2024, 1, 5),
        ),
    ]
}

fn home_page_content() -> HomePageContent {
    let metric = |id: &str, value: &str, label: &str, icon: &str, color: &str| MetricItem {
        id: id.into(),
        value: value.into(),
        label: label.into(),
        icon: icon.into(),
        color: color.into(),
        order: 0,
    };
    let step = |id: &str, title: &str, description: &str, icon: &str| MethodologyStep {
        id: id.into(),
        step_number: format!("{:0>2}", id),
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
        order: 0,
    };
    let why = |id: &str, title: &str, description: &str, icon: &str, color: &str| WhyUsItem {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
        color: color.into(),
        order: 0,
    };

    HomePageContent {
        hero: HeroSection {
            badge_text: "Digital Excellence".into(),
            title: "We Craft Digital Futures".into(),
            subtitle: "TRANSFORMING IDEAS INTO REALITY".into(),
            description: "Aureus is a premium digital agency specializing in high-end web \
                          development, branding, and immersive experiences."
                .into(),
            highlight: "Building the extraordinary.".into(),
        },
        metrics: vec![
            metric("1", "10+", "Years Experience", "Calendar", "indigo"),
            metric("2", "50+", "Awards Won", "Trophy", "yellow"),
            metric("3", "200+", "Projects Shipped", "Rocket", "cyan"),
            metric("4", "98%", "Client Satisfaction", "Heart", "rose"),
        ],
        methodology: MethodologySection {
            title: "Our Methodology".into(),
            description: "We follow a rigorous, proven process to ensure every project exceeds \
                          expectations."
                .into(),
            steps: vec![
                step("1", "Discovery", "We dive deep into your brand, goals, and audience.", "Search"),
                step("2", "Strategy", "We build a roadmap for success.", "Map"),
                step("3", "Design", "We craft stunning visuals and intuitive UX.", "PenTool"),
                step("4", "Development", "We build with clean, scalable code.", "Code"),
            ],
        },
        tech_stack: TechStackSection {
            title: "Technology & Tools".into(),
            tech_items: strings(&[
                "React", "Node.js", "TypeScript", "Next.js", "PostgreSQL", "AWS", "Docker",
                "GraphQL",
            ]),
            creative_items: strings(&[
                "Figma",
                "Adobe CC",
                "Blender",
                "Cinema 4D",
                "After Effects",
                "Spline",
            ]),
        },
        why_us: WhyUsSection {
            title: "Why Choose Aureus?".into(),
            items: vec![
                why("1", "Innovation First", "We stay ahead of the curve so you do too.", "Zap", "yellow"),
                why("2", "Pixel Perfect", "Obsessive attention to detail in every design.", "Monitor", "indigo"),
                why("3", "Results Driven", "We focus on ROI and tangible business outcomes.", "TrendingUp", "emerald"),
            ],
        },
        team_teaser: TeaserSection {
            title: "Meet the Experts".into(),
            description: "A diverse team of world-class creative and technical talent working \
                          together to build your vision."
                .into(),
        },
        blog: TeaserSection {
            title: "Latest Insights".into(),
            description: "Thoughts, trends, and tutorials from the bleeding edge of digital."
                .into(),
        },
    }
}

fn site_settings() -> SiteSettings {
    let links = |items: &[(&str, &str)]| -> Vec<FooterLink> {
        items
            .iter()
            .enumerate()
            .map(|(index, (label, url))| FooterLink {
                id: (index + 1).to_string(),
                label: label.to_string(),
                url: url.to_string(),
                order: 0,
            })
            .collect()
    };

    SiteSettings {
        general: GeneralSettings {
            site_name: "Aureus Digital".into(),
            site_description: "Premium Digital Agency".into(),
            footer_description: "Crafting digital futures.".into(),
            contact_email: "hello@aureus.agency".into(),
            careers_email: "careers@aureus.agency".into(),
        },
        footer: FooterSettings {
            division_links: links(&[("Tech", "/tech"), ("Studio", "/studio"), ("Brand", "/brand")]),
            company_links: links(&[
                ("About", "/about"),
                ("Careers", "/careers"),
                ("Contact", "/contact"),
            ]),
            other_links: links(&[("Privacy Policy", "/privacy"), ("Terms of Service", "/terms")]),
        },
        social: SocialSettings {
            twitter: "https://twitter.com/aureus".into(),
            linkedin: "https://linkedin.com/company/aureus".into(),
            github: "https://github.com/aureus".into(),
            instagram: "https://instagram.com/aureus".into(),
            youtube: "https://youtube.com/aureus".into(),
        },
        seo: SeoSettings {
            keywords: strings(&["digital agency", "web development", "branding", "3d design"]),
            default_meta_title: "Aureus Digital - Premium Agency".into(),
            default_meta_description: "Aureus Digital is a full-service agency.".into(),
            google_analytics_id: "UA-XXXXX-Y".into(),
            facebook_pixel_id: "1234567890".into(),
        },
        features: FeatureToggles {
            enable_chat_assistant: true,
            enable_newsletter: true,
            enable_quiz_tools: false,
            maintenance_mode: false,
        },
    }
}
