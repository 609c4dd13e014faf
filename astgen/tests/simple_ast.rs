#![allow(dead_code)]

use astgen::*;

#[test]
fn can_generate_ast() {
    generate_ast!(
        TestAst,
        [ S => { s: String } ]
    );
    let _node = TestAst::S(S { s: "".into() });
}

#[test]
fn uses_node_names_for_enum_variants() {
    generate_ast!(
        Example,
        [
            A => { a: isize };
            B => { b: String };
        ]
    );
    let _a_node = Example::A(A { a: 0 });
    let _b_node = Example::B(B { b: "".into() });
}

#[test]
fn accepts_a_visibility_before_the_ast_name() {
    mod inner {
        use astgen::generate_ast;

        generate_ast!(
            pub Public,
            [ Leaf => { n: f64 } ]
        );
    }
    let node = inner::Public::new_leaf(1.5);
    assert_eq!(node, inner::Public::Leaf(inner::Leaf { n: 1.5 }));
}

#[test]
fn can_clone_and_compare_nodes() {
    generate_ast!(Tree, [N => { a: usize }]);
    let n = Tree::N(N { a: 3 });
    assert_eq!(n.clone(), n);
    assert_ne!(Tree::N(N { a: 4 }), n);
}

#[test]
fn generates_new_fns() {
    generate_ast!(
        Test,
        [
            A => { a: isize };
            TwoFields => { b: usize, c: String };
        ]
    );
    assert_eq!(Test::new_a(1), Test::A(A { a: 1 }));
    assert_eq!(
        Test::new_two_fields(8, "x".into()),
        Test::TwoFields(TwoFields { b: 8, c: "x".into() })
    );
}

#[test]
fn recursive_nodes_can_be_boxed() {
    generate_ast!(
        Calc,
        [
            Num => { n: i64 };
            Neg => { inner: Box<Calc> };
        ]
    );
    let e = Calc::new_neg(Box::new(Calc::new_num(2)));
    match e {
        Calc::Neg(Neg { inner }) => assert_eq!(*inner, Calc::new_num(2)),
        _ => panic!("expected a Neg node"),
    }
}

#[test]
fn accept_fn_routes_calls_to_correct_visitor_fn() {
    generate_ast!(
        VisitMe,
        [
            NotMe => { a: String };
            Target => { a: isize };
        ]
    );
    struct V {
        called: bool,
    }
    impl Visitor<()> for V {
        fn visit_not_me_visitme(&mut self, _t: &NotMe) {}
        fn visit_target_visitme(&mut self, _t: &Target) {
            self.called = true;
        }
    }
    let mut visitor = V { called: false };
    VisitMe::new_not_me("".into()).accept(&mut visitor);
    assert!(!visitor.called);
    VisitMe::new_target(0).accept(&mut visitor);
    assert!(visitor.called);
}

#[test]
fn visitor_results_are_returned_from_accept() {
    generate_ast!(
        Shape,
        [
            Square => { side: u32 };
            Rect => { w: u32, h: u32 };
        ]
    );
    struct Area;
    impl Visitor<u32> for Area {
        fn visit_square_shape(&mut self, s: &Square) -> u32 {
            s.side * s.side
        }
        fn visit_rect_shape(&mut self, r: &Rect) -> u32 {
            r.w * r.h
        }
    }
    assert_eq!(9, Shape::new_square(3).accept(&mut Area));
    assert_eq!(10, Shape::new_rect(2, 5).accept(&mut Area));
}
