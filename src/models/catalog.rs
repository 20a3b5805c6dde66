// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio content catalog.
//!
//! The catalog holds every piece of static content shown on the page:
//! profile, action links, navigation, skills, projects, certifications
//! and contact channels. It is read-only once loaded.

use super::project::{ImageRef, Project};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Visual weight of an action link button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVariant {
    Primary,
    Secondary,
    Ghost,
}

/// Page sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "Sobre mí",
            Section::Skills => "Skills",
            Section::Projects => "Proyectos",
            Section::Certifications => "Certificaciones",
            Section::Contact => "Contacto",
        }
    }

    /// Anchor id of the section.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::About => "sobre-mi",
            Section::Skills => "skills",
            Section::Projects => "proyectos",
            Section::Certifications => "certificaciones",
            Section::Contact => "contacto",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub intro: String,
    pub photo: ImageRef,
    pub biography: Vec<String>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLink {
    pub label: String,
    pub href: String,
    pub icon: ImageRef,
    pub variant: ActionVariant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub target: Section,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_href: Option<String>,
}

/// A way to get in touch. Channels without `href` are shown as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Complete portfolio content for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    #[serde(default)]
    pub action_links: Vec<ActionLink>,
    #[serde(default)]
    pub nav_items: Vec<NavItem>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub contacts: Vec<ContactChannel>,
}

impl Catalog {
    /// Check that project identifiers are non-empty and unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.trim().is_empty() {
                bail!("Project \"{}\" has an empty id", project.title);
            }
            if !seen.insert(project.id.as_str()) {
                bail!("Duplicate project id: {}", project.id);
            }
        }
        Ok(())
    }

    /// Look up a project by id.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The content shipped with the application.
    pub fn builtin() -> Self {
        let linkedin = "https://www.linkedin.com/in/alexis-rodriguez-riquelme-565739251";
        let github = "https://github.com/Elgortax";

        Self {
            profile: Profile {
                name: "Alexis Rodríguez".into(),
                headline: "Ingeniero en Informática | Junior TI".into(),
                intro: "Este es mi portafolio personal. Aquí presento mis proyectos, habilidades \
                        y certificaciones, enfocados en desarrollo de software, automatización \
                        de procesos y soporte TI."
                    .into(),
                photo: ImageRef::new("/foto-perfil.jpg", "Fotografía de Alexis Rodríguez"),
                biography: vec![
                    "Ingeniero en Informática titulado, con formación integral en desarrollo de \
                     software, bases de datos, automatización de procesos y soporte TI."
                        .into(),
                    "Cuento con experiencia práctica en automatización mediante herramientas \
                     low-code/no-code como n8n, integración de sistemas y optimización de \
                     procesos internos, adquirida durante mi práctica profesional."
                        .into(),
                    "Me considero una persona responsable, proactiva y con alta capacidad de \
                     aprendizaje, orientada al trabajo en equipo. Busco seguir desarrollándome \
                     profesionalmente en el área TI y aportar con soluciones tecnológicas \
                     eficientes y bien estructuradas."
                        .into(),
                ],
                footer: "© 2026 Alexis Rodríguez — Portafolio personal. Desarrollado con \
                         dedicación y ganas de aprender 🚀"
                    .into(),
            },
            action_links: vec![
                ActionLink {
                    label: "LinkedIn".into(),
                    href: linkedin.into(),
                    icon: ImageRef::new("/linkedin_174857.png", "Icono de LinkedIn"),
                    variant: ActionVariant::Ghost,
                },
                ActionLink {
                    label: "Ver GitHub".into(),
                    href: github.into(),
                    icon: ImageRef::new("/github_3291695.png", "Icono de GitHub"),
                    variant: ActionVariant::Ghost,
                },
                ActionLink {
                    label: "Descargar CV".into(),
                    href: "/Alexis_Rodriguez_CV.pdf".into(),
                    icon: ImageRef::new("/cv_8347439.png", "Icono de currículum"),
                    variant: ActionVariant::Secondary,
                },
            ],
            nav_items: Section::ALL
                .iter()
                .map(|section| NavItem {
                    label: section.title().into(),
                    target: *section,
                })
                .collect(),
            skills: [
                "Java", "Python", "SQL", "PHP", "MySQL", "SQL Server", "SQLite", "PostgreSQL",
                "n8n", "Git", "GitHub", "Excel", "Power BI", "Bizagi", "Scrum", "Ágil", "UML",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            projects: vec![Project {
                id: "polycrochet".into(),
                title: "PolyCrochet – Plataforma Web para Emprendimiento".into(),
                timeframe: "2025".into(),
                summary: "Plataforma web desarrollada para un emprendimiento real, enfocada en \
                          gestión de productos y presencia digital."
                    .into(),
                description: vec![
                    "PolyCrochet es una plataforma web desarrollada para un emprendimiento real, \
                     orientada a mejorar su presencia digital y la gestión de productos."
                        .into(),
                    "El proyecto incluye desarrollo frontend y backend, conexión a base de datos, \
                     gestión de información, automatización de procesos básicos y despliegue en \
                     la nube."
                        .into(),
                    "Se aplicaron buenas prácticas de desarrollo web, control de versiones y \
                     diseño responsivo."
                        .into(),
                ],
                technologies: ["PHP", "Laravel", "MySQL", "Tailwind CSS", "Git / GitHub", "Vercel"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                image: ImageRef::new("/polycrochet/logo.png", "Vista previa del sitio PolyCrochet"),
                link_href: Some("https://polycrochet.cl".into()),
                link_label: Some("polycrochet.cl".into()),
                gallery: Some(vec![
                    ImageRef::new(
                        "/polycrochet/screen-1.png",
                        "Panel principal de PolyCrochet mostrado en escritorio",
                    ),
                    ImageRef::new(
                        "/polycrochet/screen-2.png",
                        "Vista de catálogo de productos de PolyCrochet",
                    ),
                    ImageRef::new(
                        "/polycrochet/screen-3.png",
                        "Detalle responsive de PolyCrochet en dispositivos móviles",
                    ),
                ]),
            }],
            certifications: vec![Certification {
                name: "Scrum Foundation Professional Certification – CertiProf".into(),
                issuer: "Certificación profesional en metodologías ágiles Scrum".into(),
                download_href: Some("/Certificado-Scrum.pdf".into()),
            }],
            contacts: vec![
                ContactChannel {
                    label: "Email".into(),
                    value: "alexis.rodriguez1927@gmail.com".into(),
                    href: None,
                },
                ContactChannel {
                    label: "LinkedIn".into(),
                    value: "linkedin.com/in/alexis-rodriguez-riquelme-565739251".into(),
                    href: Some(linkedin.into()),
                },
                ContactChannel {
                    label: "GitHub".into(),
                    value: "github.com/Elgortax".into(),
                    href: Some(github.into()),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::tests::sample_project;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.nav_items.len(), Section::ALL.len());
        assert_eq!(catalog.project("polycrochet").map(|p| p.gallery_len()), Some(3));
    }

    #[test]
    fn test_duplicate_project_ids_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.projects = vec![sample_project("a", None), sample_project("a", Some(2))];
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate project id"));
    }

    #[test]
    fn test_empty_project_id_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.projects.push(sample_project(" ", None));
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_unknown_project_lookup() {
        assert!(Catalog::builtin().project("missing").is_none());
    }
}
