//! Static copy for the home, team and contact pages.

pub struct Expertise {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn expertise() -> Vec<Expertise> {
    vec![
        Expertise {
            icon: "icon-shield",
            title: "Cybersecurity",
            desc: "Bridging cutting-edge cybersecurity solutions to Asia's largest financial institutions and government agencies through trusted networks.",
        },
        Expertise {
            icon: "icon-database",
            title: "Blockchain & Cryptocurrency",
            desc: "Connecting Web3 and blockchain infrastructure to traditional financial institutions and regulatory bodies across Asia.",
        },
        Expertise {
            icon: "icon-brain",
            title: "AI",
            desc: "Facilitating AI technology adoption by connecting innovative AI startups with Asia's leading financial and governmental institutions.",
        },
    ]
}

pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub img: &'static str,
}

pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Sarah Jenkins",
            title: "Managing Partner",
            bio: "20+ years in investment banking across London and Hong Kong. Specializing in cross-border M&A and institutional strategy.",
            img: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=800&auto=format&fit=crop",
        },
        TeamMember {
            name: "David Chen",
            title: "Head of Strategy",
            bio: "Former Tech Lead at top-tier cybersecurity firms. Expert in bridging Web3 infrastructure with traditional finance.",
            img: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=800&auto=format&fit=crop",
        },
        TeamMember {
            name: "Elena Rossi",
            title: "Director of Operations",
            bio: "Expert in operational scaling for FinTech startups entering the SEA market. Focus on regulatory compliance and partnerships.",
            img: "https://images.unsplash.com/photo-1580489944761-15a19d654956?q=80&w=800&auto=format&fit=crop",
        },
    ]
}

pub const HERO_IMAGE_SRC: &str = "/hero.png";

pub const HEADQUARTERS: [&str; 3] = ["14 Robinson Road, #08-01A", "Far East Finance Building", "Singapore 048545"];

pub const CONTACT_EMAIL: &str = "admin@eikonpartners.asia";

pub const LOCATIONS: [&str; 2] = ["Singapore", "Seoul"];
