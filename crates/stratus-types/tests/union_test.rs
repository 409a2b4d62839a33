use stratus_types::{TypeContext, TypeId, TypeKind, TypeProperty, TypePropertyFlags, TypeReference, TypeSymbol};

/// Every ordering of `items`
fn permutations(items: &[TypeId]) -> Vec<Vec<TypeId>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

/// A mixed member set: two primitives, a literal, an array and an object
fn sample_members(ctx: &mut TypeContext) -> Vec<TypeId> {
    let literal = ctx.string_literal("keyA");
    let strings = ctx.typed_array(TypeId::STRING);
    let obj = ctx.named_object_type("Obj", vec![TypeProperty::new("x", TypeId::INT)], None);
    vec![TypeId::STRING, TypeId::INT, literal, strings, obj]
}

#[test]
fn test_union_is_order_independent() {
    let mut ctx = TypeContext::new();
    let members = sample_members(&mut ctx);

    let expected = ctx.union_type(members.clone());
    for ordering in permutations(&members) {
        assert_eq!(ctx.union_type(ordering), expected);
    }
    assert_eq!(permutations(&members).len(), 120);
    assert_eq!(ctx.display(expected), "'keyA' | Obj | int | string | string[]");
}

#[test]
fn test_union_is_idempotent() {
    let mut ctx = TypeContext::new();
    let members = sample_members(&mut ctx);

    let union = ctx.union_type(members);
    assert_eq!(ctx.union_type([union]), union);

    let literal = ctx.string_literal("only");
    let single = ctx.union_type([literal]);
    assert_eq!(ctx.union_type([single]), single);
}

#[test]
fn test_empty_union_is_never() {
    let mut ctx = TypeContext::new();

    let never = ctx.union_type(Vec::<TypeId>::new());
    assert_eq!(never, TypeId::NEVER);
    assert_eq!(ctx.kind(never), TypeKind::Never);
    assert!(ctx.get_unchecked(never).is_never());
    assert!(ctx.get_unchecked(never).as_union().unwrap().members().is_empty());
}

#[test]
fn test_single_member_is_not_wrapped() {
    let mut ctx = TypeContext::new();

    let obj = ctx.named_object_type("Obj", Vec::new(), None);
    assert_eq!(ctx.union_type([obj]), obj);
    assert_eq!(ctx.union_type([TypeId::STRING]), TypeId::STRING);
    assert!(!matches!(ctx.get_unchecked(obj), TypeSymbol::Union(_)));
}

#[test]
fn test_duplicates_are_removed() {
    let mut ctx = TypeContext::new();

    let a = ctx.string_literal("a");
    let again = ctx.string_literal("a");
    assert_eq!(ctx.union_type([a, a]), ctx.union_type([a]));
    assert_eq!(ctx.union_type([a, again]), a);

    let b = ctx.string_literal("b");
    let union = ctx.union_type([a, b, a, b]);
    assert_eq!(ctx.union_members(union), vec![a, b]);
}

#[test]
fn test_nested_unions_are_flattened() {
    let mut ctx = TypeContext::new();

    let a = ctx.string_literal("a");
    let b = ctx.string_literal("b");
    let c = ctx.string_literal("c");

    let ab = ctx.union_type([a, b]);
    let nested = ctx.union_type([ab, c]);
    let flat = ctx.union_type([a, b, c]);
    assert_eq!(nested, flat);

    let bc = ctx.union_type([b, c]);
    assert_eq!(ctx.union_type([ab, bc]), flat);
    for &member in ctx.get_unchecked(flat).as_union().unwrap().members() {
        assert_ne!(ctx.kind(member), TypeKind::Union);
    }
    assert_eq!(ctx.display(flat), "'a' | 'b' | 'c'");
}

#[test]
fn test_deferred_members_join_the_union() {
    let mut ctx = TypeContext::new();

    let pending = ctx.declare_named_object("Node");
    let node = pending.id();
    ctx.register_named_type("Node", node);
    ctx.define_named_object(
        pending,
        vec![TypeProperty::new("next", TypeReference::deferred(|ctx: &TypeContext| {
            ctx.lookup_named_type("Node").unwrap_or(TypeId::NULL)
        }))],
        None,
        TypePropertyFlags::empty(),
    )
    .unwrap();

    let deferred = TypeReference::deferred(|ctx: &TypeContext| {
        ctx.lookup_named_type("Node").unwrap_or(TypeId::NULL)
    });
    let union = ctx.union_type([deferred, TypeReference::from(TypeId::NULL)]);
    assert_eq!(ctx.union_members(union), vec![node, TypeId::NULL]);
    assert_eq!(ctx.display(union), "Node | null");
}

#[test]
fn test_structurally_equal_objects_collapse() {
    let mut ctx = TypeContext::new();

    let first = ctx.parameter_modifier_type(TypeId::INT).unwrap();
    let second = ctx.parameter_modifier_type(TypeId::INT).unwrap();
    assert!(ctx.same_type(&first.into(), &second.into()));

    let union = ctx.union_type([first, second]);
    assert_eq!(union, first);
    assert_eq!(ctx.union_members(union), vec![first]);

    let anon_a = ctx.object_type(vec![TypeProperty::new("x", TypeId::INT)], None);
    let anon_b = ctx.object_type(vec![TypeProperty::new("x", TypeId::INT)], None);
    assert_eq!(ctx.union_type([anon_a, anon_b]), anon_a);

    let with_string = ctx.union_type([anon_a, TypeId::STRING]);
    assert_eq!(ctx.union_type([anon_b, TypeId::STRING]), with_string);
    assert_eq!(ctx.display(with_string), "object | string");
}
