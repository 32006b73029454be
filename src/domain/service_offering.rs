/// The closed set of services offered on the site.
///
/// The contact form's service dropdown and the `/api/services` listing are
/// both derived from this enum, so the two surfaces cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOffering {
    PythonDevelopment,
    WebDevelopment,
    UiUxDesign,
    WordpressWebsites,
    LandingPages,
    PortfolioWebsites,
    ResumeCreation,
    MsOfficeServices,
    MediaEditing,
}

impl ServiceOffering {
    pub const ALL: [ServiceOffering; 9] = [
        ServiceOffering::PythonDevelopment,
        ServiceOffering::WebDevelopment,
        ServiceOffering::UiUxDesign,
        ServiceOffering::WordpressWebsites,
        ServiceOffering::LandingPages,
        ServiceOffering::PortfolioWebsites,
        ServiceOffering::ResumeCreation,
        ServiceOffering::MsOfficeServices,
        ServiceOffering::MediaEditing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ServiceOffering::PythonDevelopment => "Python Development",
            ServiceOffering::WebDevelopment => "Web Development",
            ServiceOffering::UiUxDesign => "UI/UX Design",
            ServiceOffering::WordpressWebsites => "WordPress Websites",
            ServiceOffering::LandingPages => "Landing Pages",
            ServiceOffering::PortfolioWebsites => "Portfolio Websites",
            ServiceOffering::ResumeCreation => "Resume Creation",
            ServiceOffering::MsOfficeServices => "MS Office Services",
            ServiceOffering::MediaEditing => "Media Editing",
        }
    }

    pub fn from_name(name: &str) -> Option<ServiceOffering> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl std::fmt::Display for ServiceOffering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
