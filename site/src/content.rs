//! Static copy for the content panels.
//!
//! Kept as typed tables so the panel components only deal with layout.

/// Title + description pair used by the home highlights and the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureItem {
    pub title: &'static str,
    pub description: &'static str,
}

/// One column of the pricing table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    /// Monthly price, already formatted
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Highlighted tier gets a ring and the trial CTA
    pub featured: bool,
}

impl PricingPlan {
    pub fn cta_label(&self) -> &'static str {
        if self.featured {
            "Start your trial"
        } else {
            "Get started"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
}

pub const HOME_HIGHLIGHTS: &[FeatureItem] = &[
    FeatureItem {
        title: "Responsive Design",
        description: "Layouts that automatically adapt to any screen size, ensuring your site looks great on all devices.",
    },
    FeatureItem {
        title: "Modern Aesthetics",
        description: "Clean, elegant design principles that create a professional and timeless appearance.",
    },
    FeatureItem {
        title: "User-Friendly Navigation",
        description: "Intuitive interfaces that help visitors find what they're looking for quickly and easily.",
    },
    FeatureItem {
        title: "Performance Optimized",
        description: "Fast loading times and smooth interactions for an exceptional user experience.",
    },
];

pub const FEATURE_GRID: &[FeatureItem] = &[
    FeatureItem {
        title: "Responsive Layouts",
        description: "Automatically adapts to any screen size, ensuring your site looks great on all devices.",
    },
    FeatureItem {
        title: "SEO Optimization",
        description: "Built-in tools to help your site rank higher in search engine results.",
    },
    FeatureItem {
        title: "Custom Domains",
        description: "Use your own domain name to create a professional branded experience.",
    },
    FeatureItem {
        title: "Analytics Integration",
        description: "Track visitor behavior and performance with detailed analytics.",
    },
    FeatureItem {
        title: "Content Management",
        description: "Easy-to-use tools for updating and managing your content.",
    },
    FeatureItem {
        title: "Social Media Integration",
        description: "Connect your site to social platforms to extend your reach.",
    },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        price: "$12",
        description: "Perfect for small personal projects",
        features: &["1 website", "5 pages", "Custom domain", "Basic analytics", "24/7 support"],
        featured: false,
    },
    PricingPlan {
        name: "Professional",
        price: "$24",
        description: "Ideal for businesses and portfolios",
        features: &[
            "5 websites",
            "Unlimited pages",
            "Custom domains",
            "Advanced analytics",
            "Priority support",
            "E-commerce ready",
        ],
        featured: true,
    },
    PricingPlan {
        name: "Enterprise",
        price: "$49",
        description: "For larger organizations with complex needs",
        features: &[
            "Unlimited websites",
            "Unlimited pages",
            "Custom domains",
            "Advanced analytics",
            "Dedicated support",
            "E-commerce ready",
            "API access",
            "Custom integrations",
        ],
        featured: false,
    },
];

pub const STORY: &[&str] = &[
    "Founded in 2020, our company was born from a simple idea: web design should be accessible to everyone, \
     regardless of technical skill. We noticed that many platforms were either too complicated or produced \
     generic-looking results.",
    "Our mission is to bridge the gap between traditional design principles and modern web technology. \
     We believe that websites should be both beautiful and functional, creating meaningful experiences \
     for visitors while helping businesses achieve their goals.",
    "Today, our platform is used by thousands of customers around the world, from small business owners \
     to creative professionals. We continue to innovate and improve our platform based on customer feedback \
     and emerging design trends.",
];

pub const STORY_QUOTE: &str =
    "We're not just building websites; we're creating digital experiences that leave lasting impressions.";

pub const TEAM_BLURB: &str = "Our diverse team brings together expertise from various design disciplines, web development, and \
     user experience. We're united by our passion for creating beautiful, effective websites that help \
     our customers succeed online.";

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Jane Cooper",
        title: "Founder & CEO",
        bio: "15+ years of experience in web design and digital marketing.",
    },
    TeamMember {
        name: "Michael Scott",
        title: "Lead Designer",
        bio: "Award-winning designer with a passion for typography and color theory.",
    },
    TeamMember {
        name: "Sarah Johnson",
        title: "Head of Development",
        bio: "Frontend expert specialized in creating responsive, accessible websites.",
    },
];

/// Footer link row. Plain anchors, they do not switch tabs.
pub const FOOTER_LINKS: &[&str] = &["Home", "Features", "Pricing", "About", "Contact", "Blog"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_featured_plan() {
        let featured: Vec<&str> = PRICING_PLANS.iter().filter(|p| p.featured).map(|p| p.name).collect();
        assert_eq!(featured, vec!["Professional"]);
    }

    #[test]
    fn cta_label_follows_featured_flag() {
        assert_eq!(PRICING_PLANS[0].cta_label(), "Get started");
        assert_eq!(PRICING_PLANS[1].cta_label(), "Start your trial");
    }
}
