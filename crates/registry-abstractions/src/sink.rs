//! 注册表写入抽象接口

use autowire_common::Descriptor;

/// 注册表写入 trait
///
/// 宿主容器描述符存储的边界：一个插入有序、只追加的描述符集合。
/// 注册过程中引擎只读取它做冲突检测、只向它追加描述符，单次
/// 注册过程内从不清空。引擎不提供内部加锁，并发注册由调用方
/// 自行串行化。
pub trait RegistrySink {
    /// 追加一个描述符
    fn append(&mut self, descriptor: Descriptor);

    /// 按插入顺序获取全部已追加的描述符
    fn descriptors(&self) -> &[Descriptor];
}
