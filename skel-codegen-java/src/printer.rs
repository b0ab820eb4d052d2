//! Declaration printer: renders a class and its nested classes as stub text.

use skelgen_codegen::builder::CodeBuilder;
use skelgen_core::{STATIC_INITIALIZER, is_java_identifier};
use skelgen_model::{
    ClassDecl, ClassIndex, ClassKind, ClassType, ConstructorDecl, FieldDecl, MethodDecl, Modifiers,
    transform::NormalizationTransform,
};

use crate::{
    CallContext, CallStrategy, JavaTypeMapper,
    ast::{ClassHeader, Constructor, EnumConstants, Field, Method, MethodBody, Param},
    default_value, delegation_call,
    synthesis::{SynthesizedMembers, synthesize},
};

/// Renders declarations, consulting the transform and the class index.
pub struct DeclarationPrinter<'a> {
    pub types: JavaTypeMapper,
    pub index: &'a ClassIndex,
    pub transform: &'a dyn NormalizationTransform,
    pub strategies: &'a [&'a dyn CallStrategy],
}

impl DeclarationPrinter<'_> {
    /// Render `class` and its named nested classes into `out`.
    ///
    /// Anonymous classes render nothing.
    pub fn print(&self, class: &mut ClassDecl, out: &mut CodeBuilder) {
        if class.is_anonymous() {
            tracing::trace!(class = %class.name, "skipped anonymous class");
            return;
        }

        let members = synthesize(class, self.transform);

        out.push_line(&self.header(class));
        out.push_indent();
        self.print_fields(class, out);
        if !class.is_enum() {
            self.print_constructors(class, &members, out);
        }
        self.print_methods(class, &members, out);
        drop(members);

        for inner in &mut class.inner {
            self.print(inner, out);
        }
        out.push_dedent();
        out.push_line("}");
    }

    fn header(&self, class: &ClassDecl) -> String {
        let mut modifiers = class.modifiers;
        if class.kind != ClassKind::Class {
            modifiers.remove(Modifiers::ABSTRACT);
        }

        let mut header = ClassHeader::new(class.kind.keyword(), class.simple_name())
            .modifiers(modifiers.keywords())
            .generics(self.types.render_generics(&class.generics));
        if class.kind == ClassKind::Class {
            let super_class = class.super_class.clone().unwrap_or_else(ClassType::object);
            header = header.extends(self.types.render_class_type(&super_class));
        }
        for interface in &class.interfaces {
            header = header.interface(self.types.render_class_type(interface));
        }
        header.build()
    }

    fn print_fields(&self, class: &ClassDecl, out: &mut CodeBuilder) {
        let (constants, fields): (Vec<&FieldDecl>, Vec<&FieldDecl>) =
            class.fields.iter().partition(|f| f.enum_constant);

        // An enum body needs the terminating `;` before any other member.
        if !constants.is_empty() || class.is_enum() {
            let list = constants
                .iter()
                .fold(EnumConstants::new(), |list, c| list.constant(c.name.as_str()));
            out.emit(&list);
        }

        for field in fields {
            if field.is_synthetic() || field.modifiers.is_private() {
                continue;
            }
            let mut rendered = Field::new(field.name.as_str(), self.types.render(&field.ty))
                .modifiers(field.modifiers.keywords());
            // Interface fields are implicitly final.
            if class.is_interface() {
                rendered = rendered.initializer(default_value(&field.ty, &self.types));
            }
            out.emit(&rendered);
        }
    }

    fn print_constructors(
        &self,
        class: &ClassDecl,
        members: &SynthesizedMembers,
        out: &mut CodeBuilder,
    ) {
        for constructor in members.constructors.iter().chain(&class.constructors) {
            out.emit(&self.constructor(class, constructor));
        }
    }

    fn constructor(&self, class: &ClassDecl, constructor: &ConstructorDecl) -> Constructor {
        let mut ctor = constructor.parameters.iter().fold(
            Constructor::new(class.simple_name()),
            |ctor, p| ctor.param(Param::new(p.name.as_str(), self.types.render(&p.ty))),
        );
        for exception in &constructor.exceptions {
            ctor = ctor.throws(self.types.render_class_type(exception));
        }
        if let Some(call) = &constructor.first_call {
            let ctx = CallContext {
                class,
                constructor,
                call,
                index: self.index,
                types: &self.types,
            };
            ctor = ctor.delegation(delegation_call(&ctx, self.strategies));
        }
        ctor
    }

    fn print_methods(
        &self,
        class: &ClassDecl,
        members: &SynthesizedMembers,
        out: &mut CodeBuilder,
    ) {
        for method in members.methods.iter().chain(&class.methods) {
            if !is_renderable(method) {
                tracing::trace!(class = %class.name, method = %method.name, "skipped method");
                continue;
            }
            if class.is_enum() && is_implicit_enum_method(method) {
                continue;
            }
            out.emit(&self.method(class, method));
        }
    }

    fn method(&self, class: &ClassDecl, method: &MethodDecl) -> Method {
        let is_abstract = class.is_interface() || method.is_abstract();

        let mut rendered = Method::new(method.name.as_str())
            .generics(self.types.render_generics(&method.generics))
            .returns(self.types.render(&method.return_type));
        if !class.is_interface() {
            let mut modifiers = method.modifiers;
            modifiers.set(Modifiers::ABSTRACT, is_abstract);
            rendered = rendered.modifiers(modifiers.keywords());
        }
        for param in &method.parameters {
            rendered =
                rendered.param(Param::new(param.name.as_str(), self.types.render(&param.ty)));
        }
        for exception in &method.exceptions {
            rendered = rendered.throws(self.types.render_class_type(exception));
        }

        let body = if is_abstract {
            MethodBody::Abstract
        } else if method.return_type.is_void() {
            MethodBody::Empty
        } else {
            MethodBody::Return(default_value(&method.return_type, &self.types))
        };
        rendered.body(body)
    }
}

fn is_renderable(method: &MethodDecl) -> bool {
    method.name != STATIC_INITIALIZER && !method.is_private() && is_java_identifier(&method.name)
}

/// `values()` and `valueOf(String)` are implicit in Java enums.
fn is_implicit_enum_method(method: &MethodDecl) -> bool {
    if !method.is_synthetic() {
        return false;
    }
    match method.name.as_str() {
        "values" => method.parameters.is_empty(),
        "valueOf" => method.parameters.len() == 1 && method.parameters[0].ty.is_string(),
        _ => false,
    }
}
