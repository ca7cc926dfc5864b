use super::*;

fn folder(tree: &mut FileSystem, name: &str, parent: Option<ItemId>) -> ItemId {
    tree.insert(FileSystemItem::new_folder(name, parent))
}

fn file(tree: &mut FileSystem, name: &str, parent: Option<ItemId>) -> ItemId {
    tree.insert(FileSystemItem::new_file(name, parent))
}

#[test]
fn test_normalize_file_name() {
    assert_eq!(normalize_file_name("notes"), "notes.txt");
    assert_eq!(normalize_file_name("notes.txt"), "notes.txt");
    assert_eq!(normalize_file_name("notes.md"), "notes.md.txt");
    assert_eq!(normalize_file_name(""), ".txt");
}

#[test]
fn test_new_items_have_defaults() {
    let dir = FileSystemItem::new_folder("docs", None);
    assert!(dir.is_folder());
    assert!(dir.is_expanded());
    assert_eq!(dir.content(), None);

    let f = FileSystemItem::new_file("a", Some(dir.id));
    assert!(f.is_file());
    assert_eq!(f.content(), Some(""));
    assert_eq!(f.parent_id, Some(dir.id));
    assert_ne!(f.id, dir.id);
}

#[test]
fn test_item_id_parses_its_display_form() {
    let id = ItemId::generate();
    let parsed: ItemId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<ItemId>().is_err());
}

#[test]
fn test_children_keep_insertion_order() {
    let mut tree = FileSystem::new();
    let root_b = file(&mut tree, "b", None);
    let dir = folder(&mut tree, "dir", None);
    let root_a = file(&mut tree, "a", None);
    let nested = file(&mut tree, "nested", Some(dir));

    assert_eq!(tree.child_ids(None), &[root_b, dir, root_a]);
    assert_eq!(tree.child_ids(Some(dir)), &[nested]);
    assert!(tree.child_ids(Some(nested)).is_empty());

    let names: Vec<_> = tree.children(None).map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["b.txt", "dir", "a.txt"]);
}

#[test]
fn test_descendants_visits_each_item_once() {
    let mut tree = FileSystem::new();
    let top = folder(&mut tree, "top", None);
    let mid = folder(&mut tree, "mid", Some(top));
    let leaf = file(&mut tree, "leaf", Some(mid));
    let side = file(&mut tree, "side", Some(top));
    let other = file(&mut tree, "other", None);

    let mut found = tree.descendants(top);
    found.sort();
    let mut expected = vec![mid, leaf, side];
    expected.sort();
    assert_eq!(found, expected);

    assert!(tree.descendants(other).is_empty());
    assert!(tree.descendants(ItemId::generate()).is_empty());
}

#[test]
fn test_descendants_terminates_on_cycle() {
    let a = ItemId::generate();
    let b = ItemId::generate();
    let items = vec![
        FileSystemItem {
            id: a,
            name: "a".into(),
            kind: ItemKind::Folder { is_expanded: true },
            parent_id: Some(b),
        },
        FileSystemItem {
            id: b,
            name: "b".into(),
            kind: ItemKind::Folder { is_expanded: true },
            parent_id: Some(a),
        },
    ];
    let tree = FileSystem::from_items(items);

    assert_eq!(tree.descendants(a), vec![b]);
    assert!(tree.flatten_for_view().is_empty());
}

#[test]
fn test_remove_all_reindexes() {
    let mut tree = FileSystem::new();
    let first = file(&mut tree, "first", None);
    let dir = folder(&mut tree, "dir", None);
    let inner = file(&mut tree, "inner", Some(dir));
    let last = file(&mut tree, "last", None);

    let ids = [dir, inner].into_iter().collect();
    assert_eq!(tree.remove_all(&ids), 2);

    assert_eq!(tree.len(), 2);
    assert!(!tree.contains(dir));
    assert!(!tree.contains(inner));
    assert_eq!(tree.get(last).map(|i| i.name.as_str()), Some("last.txt"));
    assert_eq!(tree.child_ids(None), &[first, last]);
    assert!(tree.child_ids(Some(dir)).is_empty());
}

#[test]
fn test_from_items_drops_duplicate_ids() {
    let original = FileSystemItem::new_file("one", None);
    let mut duplicate = FileSystemItem::new_file("two", None);
    duplicate.id = original.id;

    let tree = FileSystem::from_items(vec![original.clone(), duplicate]);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(original.id), Some(&original));
}

#[test]
fn test_flatten_for_view() {
    let mut tree = FileSystem::new();
    let dir = folder(&mut tree, "dir", None);
    file(&mut tree, "inside", Some(dir));
    file(&mut tree, "outside", None);

    let rows = tree.flatten_for_view();
    let shape: Vec<_> = rows.iter().map(|r| (r.name.as_str(), r.depth)).collect();
    assert_eq!(shape, [("dir", 0), ("inside.txt", 1), ("outside.txt", 0)]);
    assert!(rows[0].is_folder);
    assert!(rows[0].is_expanded);

    if let Some(ItemKind::Folder { is_expanded }) = tree.get_mut(dir).map(|i| &mut i.kind) {
        *is_expanded = false;
    }
    let rows = tree.flatten_for_view();
    assert_eq!(rows.len(), 2);
    assert!(!rows[0].is_expanded);
}

#[test]
fn test_item_json_shape() {
    let dir = FileSystemItem::new_folder("docs", None);
    let value = serde_json::to_value(&dir).unwrap();
    assert_eq!(value["type"], "folder");
    assert_eq!(value["isExpanded"], true);
    assert!(value["parentId"].is_null());

    let f = FileSystemItem::new_file("a", Some(dir.id));
    let value = serde_json::to_value(&f).unwrap();
    assert_eq!(value["type"], "file");
    assert_eq!(value["content"], "");
    assert_eq!(value["parentId"], dir.id.to_string());
    assert_eq!(value["name"], "a.txt");
}
