//! Integration tests for whole-document generation.

use prisma_typebox::{
    generate, generate_from_json, generate_with_config, Document, EntityKind, Enum, Field,
    FieldDefault, GeneratedEntity, GeneratorConfig, Model,
};

const BLOG: &str = include_str!("fixtures/blog.json");

fn blog() -> Vec<GeneratedEntity> {
    generate_from_json(BLOG, &GeneratorConfig::default()).expect("fixture parses")
}

fn entity<'a>(entities: &'a [GeneratedEntity], name: &str) -> &'a GeneratedEntity {
    entities
        .iter()
        .find(|e| e.name == name)
        .unwrap_or_else(|| panic!("no entity named {}", name))
}

#[test]
fn test_blog_entities() {
    let entities = blog();
    assert_eq!(entities.len(), 3);
    assert_eq!(entity(&entities, "Post").kind, EntityKind::Model);
    assert_eq!(entity(&entities, "User").kind, EntityKind::Model);
    assert_eq!(entity(&entities, "Role").kind, EntityKind::Enum);
    assert!(entities.iter().all(GeneratedEntity::is_fully_resolved));
}

#[test]
fn test_post_embeds_user_without_back_reference() {
    let entities = blog();
    let post = entity(&entities, "Post");

    assert!(post.canonical.contains("export const Post = Type.Object({"));
    assert!(post.canonical.contains("author: Type.Object({"));
    assert!(post.canonical.contains("$id: '#User_dep_2_model'"));
    assert!(!post.canonical.contains("posts:"));
    assert!(!post.canonical.contains("::"));
    assert!(post
        .canonical
        .ends_with("export type PostType = Static<typeof Post>\n"));
}

#[test]
fn test_post_input_makes_identifiers_optional() {
    let entities = blog();
    let input = entity(&entities, "Post").input.clone().unwrap_or_default();

    assert!(input.contains("export const PostInput = Type.Object({"));
    // Post.id and the inlined User.id
    assert_eq!(input.matches("id: Type.Optional(Type.Number()),").count(), 2);
    assert!(input.contains("$id: '#User_dep_2_input_model'"));
    assert!(input.contains("$id: '#Post_input_model'"));
    assert!(input.ends_with("export type PostInputType = Static<typeof PostInput>\n"));

    let canonical = &entity(&entities, "Post").canonical;
    assert!(!canonical.contains("id: Type.Optional(Type.Number())"));
}

#[test]
fn test_enum_reference_is_imported() {
    let entities = blog();
    let user = entity(&entities, "User");

    assert_eq!(user.enum_imports, vec!["Role"]);
    assert!(user.canonical.contains("role: Type.Optional(Role),"));
    assert!(user.canonical.starts_with(
        "import { Type, Static } from '@sinclair/typebox'\nimport { Role } from './Role'\n\n"
    ));
}

#[test]
fn test_mutual_references_terminate_at_one_level() {
    let entities = blog();
    let user = entity(&entities, "User");

    assert!(user.canonical.contains("posts: Type.Array(Type.Object({"));
    assert!(user.canonical.contains("$id: '#Post_dep_4_model'"));
    // exactly one nested object: the inlined Post
    assert_eq!(user.canonical.matches("Type.Object(").count(), 2);
    assert!(!user.canonical.contains("author:"));
}

#[test]
fn test_counter_restarts_for_each_run() {
    let first = blog();
    let second = blog();
    assert_eq!(first, second);
}

#[test]
fn test_enum_output() {
    let entities = blog();
    let role = entity(&entities, "Role");
    assert!(role.input.is_none());
    assert!(role.canonical.contains("\tADMIN: Type.Literal('ADMIN'),\n"));
    assert!(role.canonical.contains(
        "export const Role = Type.KeyOf(Type.Object(RoleConst, { $id: '#Role', additionalProperties: false }))"
    ));
}

#[test]
fn test_unresolved_reference_is_reported() {
    let document = Document::new(
        vec![Model::new(
            "Attachment",
            vec![Field::new("id", "String").with_id(true), Field::new("data", "Bytes")],
        )],
        vec![],
    );
    let entities = generate(&document);
    assert_eq!(entities[0].unresolved, vec!["Bytes"]);
    assert!(entities[0].canonical.contains("data: ::Bytes::,"));
}

#[test]
fn test_reference_names_match_exactly() {
    let document = Document::new(
        vec![
            Model::new(
                "Account",
                vec![
                    Field::new("user", "User"),
                    Field::new("profile", "UserProfile").with_required(false),
                ],
            ),
            Model::new("User", vec![Field::new("email", "String")]),
            Model::new("UserProfile", vec![Field::new("bio", "String")]),
        ],
        vec![],
    );
    let entities = generate(&document);
    let account = &entities[0].canonical;
    assert!(account.contains("$id: '#User_dep_2_model'"));
    assert!(account.contains("profile: Type.Optional(Type.Object({"));
    assert!(account.contains("$id: '#UserProfile_dep_3_model'"));
}

#[test]
fn test_relation_as_first_field() {
    let document = Document::new(
        vec![
            Model::new("Comment", vec![Field::new("post", "Post"), Field::new("body", "String")]),
            Model::new(
                "Post",
                vec![Field::new("comments", "Comment").with_list(true)],
            ),
        ],
        vec![],
    );
    let entities = generate(&document);
    let post = &entities[1].canonical;
    assert!(post.contains("comments: Type.Array(Type.Object({\n\t\tbody: Type.String(),\n\t}, {"));
}

#[test]
fn test_custom_configuration() {
    let document = Document::new(
        vec![Model::new(
            "Event",
            vec![
                Field::new("id", "String")
                    .with_id(true)
                    .with_default(FieldDefault::function("uuid")),
                Field::new("at", "DateTime"),
                Field::new("level", "Level"),
            ],
        )],
        vec![Enum::new("Level", ["LOW", "HIGH"])],
    );
    let config = GeneratorConfig::new()
        .with_library("@sinclair/typebox/build")
        .with_enum_import_prefix("../enums/")
        .with_type_override("DateTime", "Type.String({ format: 'date-time' })");
    let entities = generate_with_config(&document, &config);
    let event = &entities[0].canonical;

    assert!(event.contains("import { Type, Static } from '@sinclair/typebox/build'"));
    assert!(event.contains("import { Level } from '../enums/Level'"));
    assert!(event.contains("at: Type.String({ format: 'date-time' }),"));
    // uuid defaults keep the identifier required in both variants
    assert!(event.contains("\tid: Type.String(),"));
    assert!(entities[0].input.as_deref().unwrap_or_default().contains("\tid: Type.String(),"));
}

#[test]
fn test_malformed_document() {
    assert!(generate_from_json("{ not json", &GeneratorConfig::default()).is_err());
    assert!(generate_from_json("{\"datamodel\": 3}", &GeneratorConfig::default()).is_err());
}
