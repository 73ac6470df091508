use serde::{Deserialize, Serialize};

/// Where an outline slot takes its body text from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotSource {
    /// A source document sitting in the base directory, extracted at run time.
    File(String),
    /// A fixed block of text carried in the manual definition itself.
    Literal(String),
    /// A declared slot with no content yet; still rendered in the output.
    Empty,
}

/// One entry inside a section: an optional sub-heading plus its content source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Sub-heading shown above the body; an empty string renders no heading.
    #[serde(default)]
    pub subheading: String,
    pub source: SlotSource,
}

/// A titled block of the manual holding an ordered list of slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub heading: String,
    pub slots: Vec<SlotConfig>,
}

/// Full definition of the manual: front matter, branding substitution and the
/// section outline. The built-in default carries the MEDIAZION 2025 edition;
/// a JSON file can override any subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualConfig {
    pub title: String,
    pub edition: String,
    pub authors: Vec<String>,
    pub entity: String,
    /// Relative path of the cover logo; referenced from the HTML, never
    /// validated at generation time.
    pub logo: String,
    /// Literal substitution applied to every extracted document: any
    /// occurrence of `rebrand_from` becomes `rebrand_to`. Case-sensitive.
    pub rebrand_from: String,
    pub rebrand_to: String,
    /// Stem of the two output files (`<basename>.html`, `<basename>.rtf`).
    pub output_basename: String,
    pub prologue: String,
    pub sections: Vec<SectionConfig>,
}

const PROLOGUE: &str = "La sociedad moderna, en sus ámbitos civiles y mercantiles, es una sociedad \
dinámica y, a la vez, conflictiva. Necesita herramientas aceptadas que le ayuden a que ese \
dinamismo no se atasque cuando un conflicto se produce. Los tribunales de justicia antaño ponían \
paz —o estaban para eso—, pero hoy resultan lentos y costosos para ciertas necesidades actuales. \
Por eso tienen cabida los Métodos Adecuados de Solución de Controversias (MASC), entre los que \
destaca la mediación. Es un método antiguo que, bien empleado, solucionará no pocos conflictos, \
descargando el sistema judicial y ofreciendo respuestas apropiadas a problemas que agilizarán las \
relaciones civiles y mercantiles. Por ello, es necesaria la formación de mediadores y la \
preparación de otros profesionales para que aprendan a emplear este método de resolución de \
controversias, pues la ley reconoce que un acta de mediación con avenencia tiene valor de \
sentencia y, en caso de incumplimiento, puede ser ejecutada judicialmente.\n\n\
En MEDIAZION, creemos que la excelencia profesional se alcanza cuando el conocimiento técnico se \
combina con una ética firme y una mirada humana. Este Manual de Mediación y Métodos Alternativos \
de Resolución de Conflictos nace con la vocación de ofrecer una guía clara, rigurosa y práctica \
para quienes trabajan cada día por la paz social: profesionales del Derecho, mediadores, \
psicólogos, trabajadores sociales, funcionarios públicos, directivos y cualquier persona \
comprometida con la transformación positiva de los conflictos.\n\n\
La obra que tiene en sus manos reúne fundamentos, metodologías y herramientas que dialogan con \
los estándares europeos y las mejores prácticas internacionales. Aborda la mediación como un \
proceso estructurado y flexible, analiza la conciliación y el arbitraje, ofrece modelos de actas \
y documentos esenciales, y explora los desafíos y oportunidades que plantean las tecnologías \
emergentes —incluida la inteligencia artificial— en el ecosistema de los MASC.\n\n\
Que estas páginas sirvan como brújula para navegar los desafíos del presente y como impulso para \
continuar construyendo entornos más justos, colaborativos y humanos. Desde MEDIAZION —con la \
mirada puesta en el interés superior de las personas y el bien común— reafirmamos nuestro \
compromiso con una cultura del entendimiento que honre la dignidad, la diversidad y la paz.\n\n\
Mario Rondán Braida\nDirector de MEDIAZION – Centro Institucional de Mediación y Resolución de \
Conflictos\n";

const APPENDIX: &str = "PQC (post-quantum cryptography), ODR, identidad digital europea (eIDAS 2) \
y EuroQCI marcarán el estándar de confianza en la resolución alternativa de disputas. MEDIAZION \
adopta una postura ética y técnica “post-quantum ready”, promoviendo seguridad, trazabilidad y \
transparencia en mediación electrónica.";

fn file_slot(subheading: &str, name: &str) -> SlotConfig {
    SlotConfig {
        subheading: subheading.to_string(),
        source: SlotSource::File(name.to_string()),
    }
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            title: "Manual Profesional de Mediación y Métodos Alternativos de Resolución de \
                    Conflictos"
                .to_string(),
            edition: "Edición 2025".to_string(),
            authors: vec![
                "Mario Rondán Braida".to_string(),
                "Sara Garrido García".to_string(),
                "Joan Alís Gabernet".to_string(),
                "Agustín Azparren Lucas".to_string(),
            ],
            entity: "MEDIAZION – Centro Institucional de Mediación y Resolución de Conflictos"
                .to_string(),
            logo: "logo.png".to_string(),
            rebrand_from: "IIMAT".to_string(),
            rebrand_to: "MEDIAZION".to_string(),
            output_basename: "Manual-MEDIAZION-2025_ES".to_string(),
            prologue: PROLOGUE.to_string(),
            sections: vec![
                SectionConfig {
                    heading: "1. Fundamentos y doctrina".to_string(),
                    slots: vec![
                        file_slot(
                            "1.1 Doctrina y reglamentos institucionales",
                            "1.-DOCTRINA Y REGLAMENTOS DEL IIMAT copy copy.pdf",
                        ),
                        file_slot(
                            "1.2 MASC / ADR: definiciones y procedimientos",
                            "2.-MASC ADR  definiciones y procedimientos ideas generales ok.doc",
                        ),
                    ],
                },
                SectionConfig {
                    heading: "2. Marco normativo".to_string(),
                    slots: vec![
                        file_slot(
                            "2.1 Legislación española de mediación",
                            "3.-legislacion de mediacion BOE-A-2012-9112-consolidado (1) copy.pdf",
                        ),
                        SlotConfig {
                            subheading: "2.2 Estándares y referencias europeas".to_string(),
                            source: SlotSource::Empty,
                        },
                    ],
                },
                SectionConfig {
                    heading: "3. Procesos y técnicas".to_string(),
                    slots: vec![
                        file_slot("3.1 Conciliación", "4.-CONCILIACIÓN IIMAT copy.pdf"),
                        file_slot(
                            "3.2 Mediación – Reglamento operativo",
                            "5.-MEDIACION REGLAMENTO.doc",
                        ),
                        file_slot("3.3 Mediación electrónica", "6.-mediacion electronica.doc"),
                        file_slot("3.4 Arbitraje", "8-arbitraje.doc"),
                        file_slot("3.5 Derecho colaborativo", "11.-El Derecho Colaborativo[1].doc"),
                    ],
                },
                SectionConfig {
                    heading: "4. Modelos y herramientas".to_string(),
                    slots: vec![
                        file_slot(
                            "4.1 Modelos de actas de mediación",
                            "7.-MODELOS DE ACTAS  DE MEDIACIÓN copy.pdf",
                        ),
                        file_slot(
                            "4.2 Tablas de aranceles",
                            "9.-TABLA DE ARANCELES ARBITRAJE Y MEDIACION.doc",
                        ),
                        file_slot(
                            "4.3 Cláusula de sometimiento a MEDIAZION",
                            "12.-clausula IIMAT.doc",
                        ),
                    ],
                },
                SectionConfig {
                    heading: "5. Innovación y tecnología".to_string(),
                    slots: vec![file_slot(
                        "5.1 Inteligencia artificial y MASC",
                        "10.-La_inteligencia_artificial_y_los_MASC copy.pdf",
                    )],
                },
                SectionConfig {
                    heading: "6. Organización institucional".to_string(),
                    slots: vec![file_slot("6.1 Corte de MEDIAZION", "13.-Corte del  IIMAT.doc")],
                },
                SectionConfig {
                    heading: "Apéndice. Mediación y confianza cuántica".to_string(),
                    slots: vec![SlotConfig {
                        subheading: String::new(),
                        source: SlotSource::Literal(APPENDIX.to_string()),
                    }],
                },
            ],
        }
    }
}

impl ManualConfig {
    pub fn validate(&self) {
        assert!(!self.title.is_empty(), "title must not be empty");
        assert!(!self.entity.is_empty(), "entity must not be empty");
        assert!(
            !self.output_basename.is_empty(),
            "output_basename must not be empty"
        );
        assert!(!self.sections.is_empty(), "sections must not be empty");
        for section in &self.sections {
            assert!(!section.heading.is_empty(), "section heading must not be empty");
            for slot in &section.slots {
                if let SlotSource::File(name) = &slot.source {
                    assert!(
                        !name.is_empty(),
                        "file slot under '{}' must name a file",
                        section.heading
                    );
                }
            }
        }
    }

    /// Filenames of every file-driven slot, in outline order.
    pub fn source_files(&self) -> Vec<&str> {
        self.sections
            .iter()
            .flat_map(|s| s.slots.iter())
            .filter_map(|slot| match &slot.source {
                SlotSource::File(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}
