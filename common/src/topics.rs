//! Predefined research-topic catalog

/// Known screening topics, in presentation order. Loaded once at module
/// start and never mutated.
pub const TOPIC_CATALOG: &[&str] = &[
    "Global Seasonality of Human Seasonal Coronaviruses, Circulating Season of Severe Acute Respiratory Syndrome",
    "Clinical Features of COVID-19 and Factors Associated with Severe Clinical Course",
    "Suboptimal Quality and High Risk of Bias in Diagnostic Test Accuracy Studies at Chest Radiography and CT in the Acute Setting of the COVID-19 Pandemic",
    "Laboratory Findings Comorbidities and Clinical Outcomes Comparing Medical Staff versus the General Population",
    "Sex-Specific COVID-19 Clinical Outcomes",
    "Clinical Outcomes of Early Versus Late Tracheostomy in Coronavirus Disease 2019 Patients",
    "Association Between Renin-Angiotensin-Aldosterone System Inhibitors and Clinical Outcomes in Patients With COVID-19",
    "Non-alcoholic fatty liver disease and clinical outcomes in patients with COVID-19",
    "Epidemiology and clinical features of COVID-19 outbreaks in aged care facilities",
    "Autopsy in COVID-19: what the clinician can learn from the dead?",
    "Relative sensitivity of anterior nares, mid-turbinate and nasopharyngeal swabs for detection of SARS-CoV-2",
    "Does metformin affect outcomes in COVID-19 patients with new or pre-existing diabetes mellitus",
    "Predicting mortality in severe COVID-19, clinical prediction rules for mortality from SARS-CoV-2 infection",
    "Effect of timing of intubation on clinical outcomes of critically ill patients with COVID-19",
    "The divergent protective effects of angiotensin-converting enzyme inhibitors and angiotensin receptor blockers on clinical outcomes of coronavirus disease 2019 (COVID-19)",
    "Corticosteroid use in COVID-19 patients",
    "The Impact of Dementia on the Clinical Outcome of COVID-19",
    "Ethnicity and clinical outcomes in COVID-19",
    "Corona Virus Disease 2019 (COVID-19) and Its Effect on Renal System",
    "The possibility and cause of relapse after previously recovered from COVID-19",
    "The use of invasive mechanical ventilation in COVID-19 patients",
    "Non-invasive ventilation for the care of patients infected with COVID-19",
    "COVID-19 infection risk to rescuers treating cardiac arrest",
    "Effect of convalescent blood products for patients with severe acute respiratory infections of viral etiology",
    "COVID-19 in pregnancy",
    "The novel 2019 coronavirus (nCoV) infection in humans",
    "Reducing stigma and discrimination associated with Covid-19",
    "Psychological consequences of COVID-19 amongst affected individuals, healthcare workers and the general population",
    "The accuracy of chest X-ray, CT and ultrasound for the diagnosis of patients with suspected COVID-19 in a hospital setting",
    "Rate of intensive care unit admission and outcomes among patients with corona viruses",
    "Clinical laboratory and imaging characteristics of children with COVID-19",
    "Impact of comorbidities on the disease course in SARS-CoV-2 infection",
    "Incidence and prognostic associations of myocardial injury in patients with coronavirus disease 2019 (COVID-19)",
    "Acute cardiac injury in patients suffering from COVID-19 infection",
    "Sociodemographic and clinical risk factors, laboratory parameters and treatments associated with higher mortality in COVID-19",
    "Maternal clinical characteristics and perinatal outcomes of pregnant women infected by coronavirus (COVID-19)",
    "Laboratory analysis and outcome for patients with COVID-19",
    "Efficacy and safety of lianhua qingwen for COVID-19",
    "The COVID-19 controversy over non-steroidal anti-inflammatory drugs (NSAIDs) in adult acute lower respiratory tract infections with COVID-19",
    "The effect of comorbid pulmonary diseases on the severity of COVID-19 patients",
    "Case fatality rates for COVID-19 patients requiring invasive mechanical ventilation",
    "Venous thromboembolism in COVID-19",
    "The prevalence of mental health disorders in university and college students during the COVID-19 pandemic",
    "The prevalence of depression, anxiety and sleep disorder in COVID-19 patients",
    "Nutritional screening tools used for identification of nutritional risk in older patients with COVID-19",
    "Home-based exercise programmes improve physical fitness of older adults",
    "Gender susceptibility in COVID-19 and outcomes",
    "Exploring options for reprocessing of N95 filtering facepiece respirators (N95-FFRs) amidst the COVID-19 pandemic",
    "Can immunity during pregnancy influence SARS-CoV-2 infection?",
    "Biomarkers of cytokine storm as red flags for severe and fatal COVID-19 cases",
    "Gastrointestinal symptoms and fecal nucleic acid testing of children with 2019 coronavirus disease",
    "Outcomes of mechanical ventilation among patients with COVID-19 adult respiratory distress syndrome",
    "Corticosteroids for COVID-19 treatment",
    "Mass screening versus community containment versus a combination of both to mitigate COVID-19",
    "Impact of non-pharmaceutical interventions targeted at the COVID-19 pandemic on influenza incidence and deaths",
    "Effect of COVID-19 on Tele-eyecare practice",
    "The role and response of primary care and community nursing in the delivery of palliative care in epidemics and pandemics",
    "Impact of disasters including pandemics such as COVID-19 on cardiometabolic outcomes across the life-course",
    "Prevalence and impact of cardiac injury in patients with COVID-19",
    "Exploring the impact of COVID-19 on mental health outcomes in children and adolescents",
    "Coronavirus disease 2019 (COVID-19) markedly increases mortality in patients with hip fracture",
    "The effects of ACEIs/ARBs on mortality in COVID-19 infected patients",
    "Perioperative mortality and morbidity in hip fractures among COVID-positive and COVID-negative patients",
    "Eating behavior changes during the COVID-19 pandemic",
    "Which mode of delivery is better for preventing possible vertical transmission from a pregnant mother confirmed with COVID-19 to a neonate? Cesarean or vaginal delivery?",
    "Eyes are the windows to COVID-19?",
    "Refugees and migrants and COVID-19",
    "Impact of COVID-19 on adolescents’ psychological state and mental health",
    "Effects of the COVID-19 pandemic on out-of-hospital cardiac arrest",
    "Hydroxychloroquine for treatment of nonsevere COVID-19 patients",
    "Human microbiome alteration in COVID-19 cases",
    "Effective public health measures to mitigate the spread of COVID-19",
    "Effect of weather on COVID-19 mortality",
    "Antibiotic prescribing in patients with COVID-19",
    "Venovenous extracorporeal membrane oxygenation for COVID-19 patients with severe acute respiratory distress syndrome",
    "Physical activity and sedentary behaviours of people during the COVID-19 pandemic lockdown compared with before the lockdown",
    "Impacts of COVID-19 on people with physical disabilities",
    "CT features of Coronavirus disease 2019 in children",
    "Pulmonary embolism and venous thromboembolism in COVID-19",
    "A rapid diagnostic test accuracy review of fear of COVID-19 scales",
    "Systemic inflammatory syndrome in COVID-19; multisystem inflammatory syndrome in children with SARS-CoV-2 infection",
];

/// Catalog entries whose lowercase form starts with the lowercase query,
/// in catalog order.
pub fn filter_topics<'a>(catalog: &[&'a str], query: &str) -> Vec<&'a str> {
    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|topic| topic.to_lowercase().starts_with(&query))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_loaded() {
        assert_eq!(TOPIC_CATALOG.len(), 81);
    }

    #[test]
    fn test_empty_query_matches_whole_catalog() {
        assert_eq!(filter_topics(TOPIC_CATALOG, ""), TOPIC_CATALOG.to_vec());
    }

    #[test]
    fn test_prefix_filter_is_case_insensitive() {
        let catalog = ["Corticosteroid use in COVID-19 patients", "COVID-19 in pregnancy"];
        assert_eq!(
            filter_topics(&catalog, "covid"),
            vec!["COVID-19 in pregnancy"]
        );
        assert_eq!(
            filter_topics(&catalog, "CORTICO"),
            vec!["Corticosteroid use in COVID-19 patients"]
        );
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = ["The b topic", "An a topic", "The a topic"];
        assert_eq!(
            filter_topics(&catalog, "the"),
            vec!["The b topic", "The a topic"]
        );
    }

    #[test]
    fn test_mid_string_match_is_not_a_prefix() {
        let catalog = ["COVID-19 in pregnancy"];
        assert!(filter_topics(&catalog, "pregnancy").is_empty());
    }

    #[test]
    fn test_no_matches_yields_empty() {
        assert!(filter_topics(TOPIC_CATALOG, "zzz").is_empty());
    }

    #[test]
    fn test_full_entry_matches_itself() {
        let entry = TOPIC_CATALOG[0];
        assert_eq!(filter_topics(TOPIC_CATALOG, entry), vec![entry]);
    }
}
