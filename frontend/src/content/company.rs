// Home, About and Contact copy.

pub const PRODUCT_NAME: &str = "Groww Book";
pub const TAGLINE: &str = "Simplify Your Accounting Journey";

#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "🤖",
        title: "AI-Powered Insights",
        description: "Get intelligent insights and predictions for better decision-making",
    },
    Highlight {
        icon: "📊",
        title: "Real-time Analytics",
        description: "Monitor your business performance with live dashboards and reports",
    },
    Highlight {
        icon: "🔄",
        title: "Automated Workflows",
        description: "Save time with smart automation and seamless integrations",
    },
];

pub const DEMO_FEATURES: &[&str] = &[
    "Automated bank reconciliation",
    "Smart expense categorization",
    "Real-time financial reporting",
    "Multi-currency support",
    "Tax compliance automation",
];

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechStart Inc",
        quote: "Groww Book has completely transformed how we handle our accounting. The AI features are game-changing!",
        avatar: "https://via.placeholder.com/100x100",
    },
    Testimonial {
        name: "Michael Chen",
        role: "CFO, Global Solutions",
        quote: "The automation features have saved us countless hours. Our team can now focus on strategic decisions.",
        avatar: "https://via.placeholder.com/100x100",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Owner, Creative Studios",
        quote: "As a small business owner, Groww Book gives me the insights I need to make informed decisions.",
        avatar: "https://via.placeholder.com/100x100",
    },
];

pub const ABOUT_INTRO: &str = "At Groww Book, our mission is to simplify financial management for businesses of all sizes. We aim to empower business owners and accountants with a powerful, intuitive, and accessible platform that transforms complex accounting into a seamless experience.";

pub const MISSION: &str = "We believe that financial management should not be a burden but a catalyst for growth. Our vision is to provide a solution that makes accounting simple, efficient, and accessible for everyone, enabling businesses to focus on what they do best: growing.";

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Amol Kotkar",
        role: "CEO & Founder",
        image: "/assets/owner1.jpg",
        description: "Visionary leader with 15+ years in fintech",
    },
    TeamMember {
        name: "Onkar Dighe",
        role: "Chief Technology Officer",
        image: "/assets/owner2.jpg",
        description: "Tech innovator specializing in AI and automation",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Milestone {
    pub year: u16,
    pub event: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone { year: 2024, event: "Company Founded" },
    Milestone { year: 2024, event: "First Major Release" },
    Milestone { year: 2025, event: "AI Integration Soon" },
    Milestone { year: 2027, event: "1 Million Users soon" },
    Milestone { year: 2030, event: "Global Expansion Soon" },
];

#[derive(Clone, Debug, PartialEq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static str,
    pub additional_info: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📞",
        title: "Phone",
        details: "+1 (555) 123-4567",
        additional_info: "Available Monday to Friday, 9 AM - 6 PM EST",
    },
    ContactChannel {
        icon: "✉️",
        title: "Email",
        details: "support@growwbook.com",
        additional_info: "We usually respond within 24 hours",
    },
    ContactChannel {
        icon: "📍",
        title: "Address",
        details: "123 Business Avenue, Silicon Valley, CA 94025",
        additional_info: "Open for in-person meetings by appointment",
    },
    ContactChannel {
        icon: "💬",
        title: "WhatsApp",
        details: "+1 (555) 987-6543",
        additional_info: "Available for instant messaging support",
    },
];

pub const OFFICE_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
    ("Holidays", "By Appointment"),
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://facebook.com"),
    ("Twitter", "https://twitter.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Instagram", "https://instagram.com"),
];

/// `mailto:` link with a pre-filled, percent-encoded subject.
pub fn support_mailto(subject: &str) -> String {
    format!(
        "mailto:{}?subject={}",
        crate::config::SUPPORT_EMAIL,
        urlencoding::encode(subject)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            support_mailto("Help & billing"),
            "mailto:support@growwbook.com?subject=Help%20%26%20billing"
        );
    }

    #[test]
    fn milestones_are_chronological() {
        assert!(MILESTONES.windows(2).all(|pair| pair[0].year <= pair[1].year));
    }
}
