//! Built-in English dictionary and the namespace file table.
//!
//! The defaults are the safety net behind every lookup: whatever the
//! per-locale files fail to provide, these strings render instead. They
//! are intentionally complete. Every key any page reads exists here,
//! so a site with no `messages/` directory at all still serves coherent
//! English pages.

use serde_json::{Value, json};

// ============================================================================
// Namespace table
// ============================================================================

/// One loadable namespace file within a locale directory.
#[derive(Clone, Copy, Debug)]
pub struct Namespace {
    /// File stem under `{messages_dir}/{locale}/`, e.g. `navigation`
    pub file_stem: &'static str,
    /// Top-level key the file's object nests under.
    ///
    /// `None` means the file already carries top-level namespaces and is
    /// spread into the bundle as-is (the `index` file works this way).
    pub wrap_key: Option<&'static str>,
}

/// Every namespace file a locale directory may provide, in load order.
///
/// Later files merge over earlier ones, which only matters if a file
/// carries a namespace it does not own.
pub const NAMESPACES: [Namespace; 8] = [
    Namespace {
        file_stem: "navigation",
        wrap_key: Some("Navigation"),
    },
    Namespace {
        file_stem: "index",
        wrap_key: None,
    },
    Namespace {
        file_stem: "products",
        wrap_key: Some("Products"),
    },
    Namespace {
        file_stem: "about",
        wrap_key: Some("About"),
    },
    Namespace {
        file_stem: "contact",
        wrap_key: Some("Contact"),
    },
    Namespace {
        file_stem: "services",
        wrap_key: Some("Services"),
    },
    Namespace {
        file_stem: "corporate",
        wrap_key: Some("Corporate"),
    },
    Namespace {
        file_stem: "elevator",
        wrap_key: Some("Elevator"),
    },
];

// ============================================================================
// Default dictionary
// ============================================================================

/// The complete default English dictionary.
///
/// Built fresh on each call; bundles consume it by value when merging.
pub fn default_messages() -> Value {
    json!({
        "Navigation": {
            "home": "Home",
            "products": "Products",
            "services": "Services",
            "about": "About",
            "contact": "Contact",
            "corporate": "Corporate",
            "language": "Language",
            "menu": "Menu"
        },
        "NotFound": {
            "title": "Page Not Found",
            "description": "The page you are looking for does not exist or has been moved.",
            "back": "Back to Home"
        },
        "Home": {
            "title": "BT Elevator",
            "description": "Modern Elevator Solutions",
            "hero": {
                "title": "Modern Elevator Solutions",
                "description": "Discover our range of modern, efficient, and reliable elevator systems",
                "cta": "Learn More"
            },
            "products": {
                "title": "Our Products",
                "description": "Innovative elevator solutions for every need",
                "viewMore": "View More",
                "items": {
                    "passenger": {
                        "title": "Passenger Elevators",
                        "description": "Comfortable and safe passenger transportation"
                    },
                    "cargo": {
                        "title": "Cargo Elevators",
                        "description": "High-capacity solutions for heavy loads"
                    },
                    "panoramic": {
                        "title": "Panoramic Elevators",
                        "description": "Elegant glass cabins with a full view"
                    }
                }
            },
            "services": {
                "title": "Our Services",
                "description": "Comprehensive elevator services and maintenance",
                "viewMore": "View More",
                "items": {
                    "maintenance": {
                        "title": "Maintenance",
                        "description": "Regular maintenance and safety checks"
                    },
                    "support": {
                        "title": "24/7 Support",
                        "description": "Emergency assistance around the clock"
                    },
                    "safety": {
                        "title": "Safety Inspections",
                        "description": "Certified periodic safety inspections"
                    }
                }
            },
            "contact": {
                "title": "Contact Us",
                "description": "Get in touch with our team",
                "cta": "Contact Us"
            }
        },
        "Products": {
            "title": "Our Products",
            "description": "Discover our range of elevator solutions",
            "hero": {
                "title": "Elevator Solutions",
                "description": "Explore our modern, efficient, and reliable elevator systems"
            },
            "products": {
                "passenger": {
                    "title": "Passenger Elevators",
                    "description": "Comfortable and efficient passenger transportation solutions",
                    "features": [
                        "Smooth and quiet operation",
                        "Advanced safety features",
                        "Energy-efficient design",
                        "Customizable interior"
                    ]
                },
                "freight": {
                    "title": "Freight Elevators",
                    "description": "Durable solutions for commercial and industrial applications",
                    "features": [
                        "High load capacity",
                        "Robust construction",
                        "Wide door openings",
                        "Industrial materials"
                    ]
                },
                "residential": {
                    "title": "Residential Elevators",
                    "description": "Elegant and compact home elevator solutions",
                    "features": [
                        "Compact design",
                        "Quiet operation",
                        "Easy maintenance",
                        "Modern aesthetics"
                    ]
                },
                "commercial": {
                    "title": "Commercial Elevators",
                    "description": "Professional solutions for commercial buildings",
                    "features": [
                        "High traffic capacity",
                        "Smart control systems",
                        "Energy efficiency",
                        "Premium finishes"
                    ]
                }
            },
            "cta": {
                "title": "Ready to Upgrade Your Elevator?",
                "description": "Contact us to discuss your specific needs",
                "button": "Get in Touch",
                "learnMore": "Learn More"
            }
        },
        "About": {
            "title": "About Us",
            "description": "Learn more about our company and our commitment to excellence",
            "hero": {
                "title": "About BT Elevator",
                "description": "Three decades of vertical mobility expertise"
            },
            "history": {
                "title": "Our History",
                "description": "From a local workshop to a trusted elevator brand",
                "content": "Founded in Istanbul, BT Elevator grew from a small maintenance workshop into a full-service elevator company delivering installations and modernizations across the region."
            },
            "mission": {
                "title": "Our Mission",
                "description": "Safe and comfortable vertical transportation for everyone",
                "content": "We design, install, and maintain elevator systems that move people safely, quietly, and efficiently, with service quality at the center of everything we do."
            },
            "values": {
                "title": "Our Values",
                "items": [
                    {
                        "title": "Safety First",
                        "description": "Every decision starts with passenger safety."
                    },
                    {
                        "title": "Reliability",
                        "description": "Systems our customers can depend on every day."
                    },
                    {
                        "title": "Innovation",
                        "description": "Modern technology applied with practical engineering."
                    },
                    {
                        "title": "Customer Focus",
                        "description": "Long-term partnerships built on responsive service."
                    }
                ]
            },
            "team": {
                "title": "Our Team",
                "description": "The engineers and technicians behind every installation",
                "content": "Our certified engineers and field technicians bring decades of combined experience in elevator design, installation, and maintenance."
            },
            "stats": {
                "title": "BT Elevator in Numbers",
                "items": [
                    { "value": "30+", "label": "Years of Experience" },
                    { "value": "1500+", "label": "Completed Installations" },
                    { "value": "500+", "label": "Maintenance Contracts" }
                ]
            }
        },
        "Contact": {
            "title": "Contact Us",
            "description": "Get in touch with our team",
            "cta": "Contact Us",
            "hero": {
                "title": "Get in Touch with BT Elevator",
                "description": "We are here for all your elevator needs"
            },
            "form": {
                "title": "Send Us a Message",
                "name": "Full Name",
                "email": "Email Address",
                "phone": "Phone Number",
                "subject": "Subject",
                "selectSubject": "Select a subject",
                "subjects": {
                    "general": "General Inquiry",
                    "sales": "Sales",
                    "support": "Technical Support",
                    "other": "Other"
                },
                "message": "Message",
                "submit": "Send Message"
            },
            "contact": {
                "title": "Contact Information",
                "phone": { "title": "Phone", "value": "+90 (555) 123 45 67" },
                "email": { "title": "Email", "value": "info@btasansor.com" },
                "address": {
                    "title": "Address",
                    "value": "Asansör Caddesi No:123, Bina Şehri, 34000"
                },
                "hours": {
                    "title": "Working Hours",
                    "value": "Monday - Friday: 09:00 - 18:00"
                }
            },
            "map": { "title": "Find Us" }
        },
        "Services": {
            "title": "Our Services",
            "description": "Comprehensive elevator services and maintenance",
            "viewMore": "View More",
            "hero": {
                "title": "Elevator Services",
                "description": "Professional maintenance, repair, and installation services"
            },
            "services": {
                "maintenance": {
                    "title": "Maintenance",
                    "description": "Scheduled maintenance programs that keep elevators safe and running",
                    "features": [
                        "Monthly inspection visits",
                        "Genuine spare parts",
                        "Safety compliance checks",
                        "Detailed service reports"
                    ]
                },
                "repair": {
                    "title": "Repair",
                    "description": "Fast diagnosis and repair for every elevator brand",
                    "features": [
                        "24/7 emergency callout",
                        "On-site fault diagnosis",
                        "Component-level repairs",
                        "Post-repair safety testing"
                    ]
                },
                "installation": {
                    "title": "Installation",
                    "description": "Turnkey installation for new and existing buildings",
                    "features": [
                        "Site survey and planning",
                        "Certified assembly teams",
                        "Commissioning and handover",
                        "Warranty coverage"
                    ]
                }
            },
            "process": {
                "title": "How We Work",
                "steps": [
                    {
                        "title": "Consultation",
                        "description": "We assess your building and requirements."
                    },
                    {
                        "title": "Proposal",
                        "description": "You receive a detailed technical and financial offer."
                    },
                    {
                        "title": "Execution",
                        "description": "Certified teams carry out the work on schedule."
                    },
                    {
                        "title": "Follow-up",
                        "description": "We stay involved with maintenance and support."
                    }
                ]
            },
            "cta": {
                "title": "Need an Elevator Service?",
                "description": "Talk to our service team today",
                "button": "Request Service"
            }
        },
        "Corporate": {
            "title": "Corporate",
            "description": "Corporate information about BT Elevator",
            "hero": {
                "title": "Corporate",
                "description": "Who we are and how we work"
            },
            "sections": {
                "company": {
                    "title": "Our Company",
                    "description": "History, mission, and the team behind BT Elevator",
                    "link": "About Us"
                },
                "policies": {
                    "title": "Policies",
                    "description": "Quality, safety, and service policies",
                    "link": "Our Policies"
                },
                "careers": {
                    "title": "Careers",
                    "description": "Open positions and working at BT Elevator",
                    "link": "Join Us"
                },
                "investors": {
                    "title": "Investor Relations",
                    "description": "Financial information and corporate governance",
                    "link": "Learn More"
                },
                "sustainability": {
                    "title": "Sustainability",
                    "description": "Energy-efficient products and responsible operations",
                    "link": "Our Approach"
                },
                "compliance": {
                    "title": "Compliance",
                    "description": "Standards, certificates, and regulatory compliance",
                    "link": "View Certificates"
                }
            },
            "values": {
                "title": "Corporate Values",
                "items": [
                    {
                        "title": "Integrity",
                        "description": "Honest dealings in every relationship."
                    },
                    {
                        "title": "Accountability",
                        "description": "We stand behind every installation and service call."
                    },
                    {
                        "title": "Transparency",
                        "description": "Clear communication with customers and partners."
                    },
                    {
                        "title": "Respect",
                        "description": "For people, regulations, and the environment."
                    }
                ]
            },
            "cta": {
                "title": "Work With Us",
                "description": "Learn how BT Elevator can serve your building",
                "button": "Contact Us"
            }
        },
        "Elevator": {
            "title": "Elevator Demo",
            "description": "Try our interactive elevator simulation",
            "elevatorControls": "Elevator Controls",
            "floorPanel": "Floor Panel",
            "floor": "Floor {number}",
            "call": "Call",
            "called": "Called",
            "currentFloor": "Current Floor: {number}"
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_namespaces_present() {
        let defaults = default_messages();
        let root = defaults.as_object().unwrap();
        for ns in [
            "Navigation",
            "NotFound",
            "Home",
            "Products",
            "About",
            "Contact",
            "Services",
            "Corporate",
            "Elevator",
        ] {
            assert!(root.contains_key(ns), "missing namespace {ns}");
            assert!(root[ns].is_object(), "namespace {ns} is not an object");
        }
    }

    #[test]
    fn test_spot_check_nested_keys() {
        let defaults = default_messages();
        assert_eq!(
            defaults["Home"]["hero"]["cta"],
            serde_json::json!("Learn More")
        );
        assert_eq!(
            defaults["Products"]["products"]["passenger"]["features"]
                .as_array()
                .unwrap()
                .len(),
            4
        );
        assert_eq!(
            defaults["Contact"]["contact"]["phone"]["title"],
            serde_json::json!("Phone")
        );
        assert_eq!(
            defaults["Elevator"]["floor"],
            serde_json::json!("Floor {number}")
        );
    }

    #[test]
    fn test_namespace_table_stems_are_unique() {
        let mut stems: Vec<&str> = NAMESPACES.iter().map(|ns| ns.file_stem).collect();
        stems.sort_unstable();
        stems.dedup();
        assert_eq!(stems.len(), NAMESPACES.len());
    }

    #[test]
    fn test_wrap_keys_exist_in_defaults() {
        let defaults = default_messages();
        let root = defaults.as_object().unwrap();
        for ns in NAMESPACES {
            if let Some(key) = ns.wrap_key {
                assert!(root.contains_key(key), "no default namespace for {key}");
            }
        }
    }

    #[test]
    fn test_item_collections_pages_iterate_are_arrays() {
        let defaults = default_messages();
        assert!(defaults["About"]["values"]["items"].is_array());
        assert!(defaults["About"]["stats"]["items"].is_array());
        assert!(defaults["Services"]["process"]["steps"].is_array());
        assert!(defaults["Corporate"]["values"]["items"].is_array());
    }

    #[test]
    fn test_item_collections_pages_address_by_key_are_objects() {
        let defaults = default_messages();
        assert!(defaults["Home"]["products"]["items"].is_object());
        assert!(defaults["Home"]["services"]["items"].is_object());
        assert!(defaults["Products"]["products"].is_object());
        assert!(defaults["Corporate"]["sections"].is_object());
        assert!(defaults["Contact"]["form"]["subjects"].is_object());
    }
}
