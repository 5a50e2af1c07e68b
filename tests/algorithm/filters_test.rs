#[cfg(test)]
mod tests {
    use family_tree::{FilterCriteria, PersonFilter, render_person_with};
    use family_tree::render::style::fill_color;

    use crate::utils::{date, first_names, sample_graph};

    #[test]
    fn test_filter_over_graph() {
        let graph = sample_graph();
        let living_smiths = PersonFilter::All(vec![
            PersonFilter::LastName("Smith".to_string()),
            PersonFilter::Living,
        ]);
        assert_eq!(first_names(living_smiths.apply(graph.people())), ["Carl", "Emil"]);

        let alive_in_1929 = PersonFilter::AliveAt(date(1929, 1, 1));
        assert_eq!(first_names(alive_in_1929.apply(graph.people())), ["Bert"]);
    }

    #[test]
    fn test_filter_as_render_predicate() {
        let graph = sample_graph();
        let emil = graph.find("Emil", "Smith").unwrap();
        let jones = PersonFilter::LastName("Jones".to_string());

        let uml = render_person_with(&graph, emil, fill_color("Yellow"), jones.as_predicate());
        assert!(uml.contains("object #Yellow \"Dora Jones\" as Dora_Jones\n"));
        assert!(uml.contains("object \"Carl Smith\" as Carl_Smith\n"));
        assert!(!uml.contains("object \"Emil Smith\""));
        assert!(graph.person(emil).is_some_and(|p| !jones.meets_criteria(p)));
    }
}
