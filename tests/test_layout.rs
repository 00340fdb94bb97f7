use sosatree::gedcom;
use sosatree::layout::{Coordinate, LayoutGeometry, Page, Paginator, layout};
use sosatree::locale::Locale;
use sosatree::model::{FamilyRecord, GenerationCap, PersonName, PersonRecord, RecordIndex, SosaNumber, XrefId};
use std::path::Path;

fn load(fixture: &str) -> RecordIndex {
    let path = Path::new("tests").join("fixtures").join(fixture);
    let result = gedcom::parse_file(path);
    if let Err(e) = &result {
        eprintln!("Error reading {fixture}: {e}");
    }
    RecordIndex::build(result.unwrap())
}

fn pages_for(index: &RecordIndex, root: &str, cap: GenerationCap, per_page: u32) -> Vec<Page> {
    let root = index.person(&XrefId::new(root)).unwrap();
    layout(root, SosaNumber::ROOT, index, cap, per_page)
}

fn sosa(n: u64) -> SosaNumber {
    SosaNumber::new(n).unwrap()
}

fn roots(pages: &[Page]) -> Vec<u64> {
    pages.iter().map(|p| p.root_sosa().get()).collect()
}

/// Complete pedigree: person `@I{n}@` is the ancestor with Sosa number `n`.
fn full_pedigree(generations: u32) -> RecordIndex {
    let last = 1u64 << generations;
    let mut persons = Vec::new();
    let mut families = Vec::new();
    for n in 1..last {
        let mut person = PersonRecord::new(format!("@I{n}@"), PersonName::new(format!("S{n}"), "G"));
        if 2 * n < last {
            person = person.with_child_of(format!("@F{n}@"));
            families.push(
                FamilyRecord::new(
                    format!("@F{n}@"),
                    Some(XrefId::new(format!("@I{}@", 2 * n))),
                    Some(XrefId::new(format!("@I{}@", 2 * n + 1))),
                )
                .with_child(format!("@I{n}@")),
            );
        }
        persons.push(person);
    }
    RecordIndex::from_records(persons, families)
}

/// Checks that every continuation leaf has exactly one later page rooted at it.
fn assert_continuations_match(pages: &[Page]) {
    let leaves: usize = pages.iter().map(|p| p.continuation_leaves().count()).sum();
    assert_eq!(pages.len(), leaves + 1);

    for (i, page) in pages.iter().enumerate() {
        for leaf in page.continuation_leaves() {
            let continued: Vec<&Page> = pages
                .iter()
                .enumerate()
                .filter(|(j, p)| *j > i && p.root_sosa() == leaf.sosa())
                .map(|(_, p)| p)
                .collect();
            assert_eq!(continued.len(), 1, "leaf {} continued once", leaf.sosa());
            let next = continued[0];
            assert_eq!(next.root_person(), leaf.person());
            assert_eq!(
                next.generation_offset(),
                page.generation_offset() + page.local_generation(leaf)
            );
            // Subtree of a continuation leaf is not drawn on its page
            assert!(page.edges().iter().all(|e| e.from != leaf.sosa()));
        }
    }
}

#[test]
fn test_single_person_page() {
    let root = PersonRecord::new("@I1@", PersonName::parse("Solo /Person/"));
    let index = RecordIndex::from_records(vec![root.clone()], vec![]);
    let pages = layout(&root, SosaNumber::ROOT, &index, GenerationCap::Unbounded, 5);

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].nodes().len(), 1);
    assert!(pages[0].edges().is_empty());
    assert_eq!(pages[0].title(), "The root");
    assert_eq!(pages[0].nodes()[0].position(), Coordinate { x: 0.0, y: 0.0 });
}

#[test]
fn test_collapsed_ancestor_drawn_per_line() {
    let index = load("collapse.ged");
    let pages = pages_for(&index, "@I1@", GenerationCap::Unbounded, 5);

    assert_eq!(pages.len(), 1);
    let page = &pages[0];
    let order: Vec<u64> = page.nodes().iter().map(|n| n.sosa().get()).collect();
    assert_eq!(order, vec![1, 2, 4, 8, 5, 3, 6, 12, 7]);
    assert_eq!(page.edges().len(), 8);

    let four = page.node(sosa(4)).unwrap();
    let six = page.node(sosa(6)).unwrap();
    assert_eq!(four.person(), six.person());
    assert_eq!(four.label(), "Martin, Louis");
}

#[test]
fn test_coordinates() {
    let index = load("collapse.ged");
    let pages = pages_for(&index, "@I1@", GenerationCap::Unbounded, 5);
    let page = &pages[0];
    let at = |n: u64| page.node(sosa(n)).unwrap().position();

    assert_eq!(at(1), Coordinate { x: 0.0, y: 0.0 });
    assert_eq!(at(2), Coordinate { x: 4.5, y: 6.0 });
    assert_eq!(at(3), Coordinate { x: 4.5, y: -6.0 });
    assert_eq!(at(4), Coordinate { x: 9.0, y: 9.0 });
    assert_eq!(at(5), Coordinate { x: 9.0, y: 3.0 });
    assert_eq!(at(8), Coordinate { x: 13.5, y: 10.5 });
    assert_eq!(at(12), Coordinate { x: 13.5, y: -1.5 });
}

#[test]
fn test_custom_geometry() {
    let index = load("collapse.ged");
    let root = index.person(&XrefId::new("@I1@")).unwrap();
    let geometry = LayoutGeometry {
        generation_spacing: 2.0,
        branch_spread: 8.0,
    };
    let pages = Paginator::new(&index).with_geometry(geometry).paginate(root, SosaNumber::ROOT);
    assert_eq!(pages[0].node(sosa(5)).unwrap().position(), Coordinate { x: 4.0, y: 4.0 });
}

#[test]
fn test_sibling_subtrees_are_disjoint() {
    let index = full_pedigree(5);
    let pages = pages_for(&index, "@I1@", GenerationCap::Unbounded, 5);
    assert_eq!(pages.len(), 1);
    let page = &pages[0];
    assert_eq!(page.nodes().len(), 31);

    for node in page.nodes() {
        let n = node.sosa().get();
        for other in page.nodes() {
            let m = other.sosa().get();
            let depth = other.sosa().generation() as i64 - node.sosa().generation() as i64;
            if depth < 1 {
                continue;
            }
            let ancestor_of_parent = m >> (depth - 1);
            if ancestor_of_parent == 2 * n {
                assert!(other.position().y > node.position().y, "{m} above {n}");
            } else if ancestor_of_parent == 2 * n + 1 {
                assert!(other.position().y < node.position().y, "{m} below {n}");
            }
        }
    }
}

#[test]
fn test_continuation_leaf_opens_page() {
    let index = load("paternal_line.ged");
    let pages = pages_for(&index, "@I1@", GenerationCap::Unbounded, 3);

    assert_eq!(roots(&pages), vec![1, 4, 16, 64, 256]);
    let leaf = pages[0].node(sosa(4)).unwrap();
    assert!(leaf.is_continuation());
    assert_eq!(pages[1].root_person(), &XrefId::new("@I3@"));
    assert_eq!(pages[1].generation_offset(), 2);
    assert_eq!(pages[1].title(), "Continuation of branch 4 (Line, Given3)");

    // Last ancestor has no parents and ends the chain as a plain node
    assert_eq!(pages[4].continuation_leaves().count(), 0);
    assert_eq!(pages[4].nodes().len(), 2);
    assert_continuations_match(&pages);
}

#[test]
fn test_page_span_is_bounded() {
    let index = full_pedigree(8);
    for per_page in 2..=6 {
        let pages = pages_for(&index, "@I1@", GenerationCap::Unbounded, per_page);
        assert!(pages.iter().all(|p| p.generation_span() <= per_page));
        assert_continuations_match(&pages);

        // Every ancestor is drawn exactly once as a non-continuation node
        let drawn: usize = pages
            .iter()
            .map(|p| p.nodes().iter().filter(|n| !n.is_continuation()).count())
            .sum();
        assert_eq!(drawn, 255);
    }
}

#[test]
fn test_pages_in_discovery_order() {
    let index = load("collapse.ged");
    let pages = pages_for(&index, "@I1@", GenerationCap::Unbounded, 2);

    assert_eq!(roots(&pages), vec![1, 2, 3, 4, 6]);
    assert_eq!(pages[1].title(), "Continuation of branch 2 (Martin, Pierre)");
    assert_continuations_match(&pages);
}

#[test]
fn test_single_generation_per_page_still_progresses() {
    let index = load("collapse.ged");
    let narrow = pages_for(&index, "@I1@", GenerationCap::Unbounded, 1);
    let two = pages_for(&index, "@I1@", GenerationCap::Unbounded, 2);
    assert_eq!(narrow, two);
}

#[test]
fn test_cap_prevents_continuation() {
    let index = load("paternal_line.ged");

    let pages = pages_for(&index, "@I1@", GenerationCap::Limited(3), 3);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].continuation_leaves().count(), 0);
    assert!(pages[0].node(sosa(4)).is_some());

    let pages = pages_for(&index, "@I1@", GenerationCap::Limited(4), 3);
    assert_eq!(roots(&pages), vec![1, 4]);
    let max = pages
        .iter()
        .flat_map(|p| p.nodes())
        .map(|n| n.sosa().bit_length())
        .max();
    assert_eq!(max, Some(4));
}

#[test]
fn test_cycle_terminates() {
    let index = load("cycle.ged");

    let pages = pages_for(&index, "@I1@", GenerationCap::Unbounded, 5);
    assert_eq!(roots(&pages), vec![1]);
    assert_eq!(pages[0].nodes().len(), 3);
    assert_eq!(pages[0].edges().len(), 2);

    // On-path identities are carried over to continuation pages
    let pages = pages_for(&index, "@I1@", GenerationCap::Unbounded, 2);
    assert_eq!(roots(&pages), vec![1, 2]);
    assert_eq!(pages[1].nodes().len(), 2);
    assert_eq!(pages[1].continuation_leaves().count(), 0);
}

#[test]
fn test_localized_titles() {
    let index = load("paternal_line.ged");
    let root = index.person(&XrefId::new("@I1@")).unwrap();
    let pages = Paginator::new(&index)
        .with_max_generation_per_page(3)
        .with_locale(Locale::French)
        .paginate(root, SosaNumber::ROOT);
    assert_eq!(pages[0].title(), "La racine");
    assert_eq!(pages[1].title(), "Suite de la branche 4 (Line, Given3)");
}
