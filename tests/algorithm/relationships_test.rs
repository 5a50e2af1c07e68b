#[cfg(test)]
mod tests {
    use family_tree::algorithm::relationships::resolve_with;
    use family_tree::{
        FamilyTreeError, LoaderConfig, ParentingViolation, Person, PersonId, load_records, resolve,
    };

    use crate::utils::{date, first_names, person, sample_graph};

    #[test]
    fn test_plausible_parent_is_accepted() {
        let child = person("John", "Doe", date(1980, 1, 1), None).with_parents("Jane", "");
        let parent = person("Jane", "Doe", date(1960, 1, 1), None);

        let graph = resolve(vec![child, parent]).unwrap();
        let john = graph.find("John", "Doe").unwrap();
        assert_eq!(graph.parent_ids(john), [PersonId(1)]);
        assert_eq!(first_names(graph.parents_of(john)), ["Jane"]);
        assert!(graph.parent_ids(PersonId(1)).is_empty());
    }

    #[test]
    fn test_parent_younger_than_threshold_fails() {
        let child = person("John", "Doe", date(1980, 1, 1), None).with_parents("Jane", "");
        let parent = person("Jane", "Doe", date(1970, 1, 1), None);

        let err = resolve(vec![child, parent]).unwrap_err();
        match err {
            FamilyTreeError::ParentingAge {
                parent,
                child,
                violation,
            } => {
                assert_eq!(parent, "Jane Doe");
                assert_eq!(child, "John Doe");
                assert_eq!(violation, ParentingViolation::TooYoung { min_age_years: 15 });
            }
            other => panic!("expected ParentingAge, got {other:?}"),
        }
    }

    #[test]
    fn test_deceased_parent_fails() {
        let child = person("John", "Doe", date(1980, 1, 1), None).with_parents("", "Jim");
        let parent = person("Jim", "Doe", date(1940, 1, 1), Some(date(1979, 1, 1)));

        let err = resolve(vec![parent, child]).unwrap_err();
        assert!(matches!(
            err,
            FamilyTreeError::ParentingAge {
                violation: ParentingViolation::DeceasedBeforeBirth,
                ..
            }
        ));
    }

    #[test]
    fn test_matching_uses_first_name_only() {
        let people = load_records(
            [
                "John,Doe,1980-01-01,,Jane,",
                "Jane,Doe,1950-01-01,,,",
                "Jane,Roe,1955-01-01,,,",
            ],
            &LoaderConfig::default(),
        )
        .unwrap();

        let graph = resolve(people).unwrap();
        let parents: Vec<_> = graph.parents_of(PersonId(0)).map(Person::full_name).collect();
        assert_eq!(parents, ["Jane Doe", "Jane Roe"]);
    }

    #[test]
    fn test_unrelated_namesake_can_fail_resolution() {
        // Jane Roe shares the referenced first name but is too young
        let people = load_records(
            [
                "John,Doe,1980-01-01,,Jane,",
                "Jane,Doe,1950-01-01,,,",
                "Jane,Roe,1975-01-01,,,",
            ],
            &LoaderConfig::default(),
        )
        .unwrap();

        let err = resolve(people).unwrap_err();
        assert!(matches!(err, FamilyTreeError::ParentingAge { ref parent, .. } if parent == "Jane Roe"));
    }

    #[test]
    fn test_self_reference_is_rejected() {
        let narcissus = person("Narcissus", "Doe", date(1980, 1, 1), None).with_parents("Narcissus", "");
        let err = resolve(vec![narcissus]).unwrap_err();
        assert!(matches!(
            err,
            FamilyTreeError::ParentingAge { ref parent, ref child, .. }
                if parent == "Narcissus Doe" && child == "Narcissus Doe"
        ));
    }

    #[test]
    fn test_parents_follow_record_order() {
        let graph = sample_graph();
        let carl = graph.find("Carl", "Smith").unwrap();
        let emil = graph.find("Emil", "Smith").unwrap();

        assert_eq!(first_names(graph.parents_of(carl)), ["Anna", "Bert"]);
        assert_eq!(first_names(graph.parents_of(emil)), ["Carl", "Dora"]);

        let children: Vec<_> = graph.children_of(carl).collect();
        assert_eq!(
            children,
            [graph.find("Emil", "Smith").unwrap(), graph.find("Fay", "Smith").unwrap()]
        );
    }

    #[test]
    fn test_unmatched_references_are_ignored() {
        let child = person("John", "Doe", date(1980, 1, 1), None).with_parents("Nobody", "Ghost");
        let graph = resolve(vec![child]).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_configurable_threshold() {
        let child = person("John", "Doe", date(1980, 1, 1), None).with_parents("Jane", "");
        let parent = person("Jane", "Doe", date(1962, 1, 1), None);
        let config = LoaderConfig {
            parenting_age_years: 20,
            ..LoaderConfig::default()
        };

        let err = resolve_with(vec![child.clone(), parent.clone()], &config).unwrap_err();
        assert!(matches!(
            err,
            FamilyTreeError::ParentingAge {
                violation: ParentingViolation::TooYoung { min_age_years: 20 },
                ..
            }
        ));
        assert!(resolve(vec![child, parent]).is_ok());
    }
}
